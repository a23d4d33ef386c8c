//! Python bindings for magicsniff.
//!
//! Exposes the process-wide sniffer. Python callables can be registered as
//! signature predicates; they receive the sniff window as `bytes` and any
//! exception they raise counts as a non-match.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

/// Sniff the MIME type of `data`.
#[pyfunction]
#[pyo3(name = "sniff")]
pub fn sniff_py(data: &[u8]) -> String {
    crate::sniff(data)
}

/// Sniff `data`, returning `(mime, source)`.
#[pyfunction]
#[pyo3(name = "detect")]
pub fn detect_py(data: &[u8]) -> (String, String) {
    let detection = crate::global().detect(data);
    (detection.mime, detection.source.to_string())
}

fn python_predicate(callable: Py<PyAny>) -> impl Fn(&[u8]) -> bool + Send + Sync + 'static {
    move |data: &[u8]| {
        Python::attach(|py| {
            callable
                .call1(py, (PyBytes::new(py, data),))
                .and_then(|result| result.bind(py).is_truthy())
                .unwrap_or(false)
        })
    }
}

/// Register `predicate` under `mime_type`; invalid types are ignored.
#[pyfunction]
#[pyo3(name = "register")]
pub fn register_py(mime_type: &str, predicate: Py<PyAny>) {
    crate::register(mime_type, python_predicate(predicate));
}

/// Register `predicate` under `mime_type`, raising `ValueError` if invalid.
#[pyfunction]
#[pyo3(name = "try_register")]
pub fn try_register_py(mime_type: &str, predicate: Py<PyAny>) -> PyResult<()> {
    crate::global().try_register(mime_type, python_predicate(predicate))?;
    Ok(())
}

/// Route tracing events to stderr, as text or as JSON lines.
#[pyfunction]
#[pyo3(name = "init_logging", signature = (json = false))]
pub fn init_logging_py(json: bool) {
    let format = if json {
        crate::logging::LogFormat::Json
    } else {
        crate::logging::LogFormat::Text
    };
    crate::logging::init_tracing(format);
}

/// Register all Python bindings with the module.
pub fn register_python_bindings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sniff_py, m)?)?;
    m.add_function(wrap_pyfunction!(detect_py, m)?)?;
    m.add_function(wrap_pyfunction!(register_py, m)?)?;
    m.add_function(wrap_pyfunction!(try_register_py, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging_py, m)?)?;
    m.add("OCTET_STREAM", crate::OCTET_STREAM)?;
    Ok(())
}
