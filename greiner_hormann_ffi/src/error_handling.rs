use std::{cell::RefCell, ffi::CString};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the function that set the error.
    pub function: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, function: CString) -> Self {
        LastErrorData {
            error_msg,
            function,
        }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = RefCell::new(None));

fn to_cstring<T: Into<Vec<u8>>>(bytes: T, fallback: &'static [u8]) -> CString {
    // fallback is a literal without interior nulls
    CString::new(bytes).unwrap_or_else(|_| CString::new(fallback).unwrap_or_default())
}

/// Set last error information for the current thread.
///
/// `error_msg` and `function` are turned into CStrings from bytes, bytes must not include any
/// nulls (replaced by a generic message if they do).
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T, function: T) {
    let msg = to_cstring(error_msg, b"Failed to create error message string!");
    let function = to_cstring(function, b"Failed to create function name string!");

    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(LastErrorData::new(msg, function));
    });
}

/// Clear the last error information for the current thread.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = None;
    });
}
