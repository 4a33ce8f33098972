//! This module contains the C foreign function interface for greiner_hormann.
#![allow(non_camel_case_types)]
pub mod error_handling;

use core::slice;
use error_handling::{clear_last_error, set_last_error, LAST_ERROR};
use greiner_hormann::{
    core::math::Vector2,
    error::ClipError,
    polygon::{BooleanOp, BooleanOptions, Polygon},
};
use std::{ffi::c_char, panic};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct gh_point {
    pub x: f64,
    pub y: f64,
}

impl gh_point {
    pub fn new(x: f64, y: f64) -> Self {
        gh_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        gh_point::new(v.x, v.y)
    }
}

/// Opaque type that wraps a [Polygon].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct gh_polygon(pub Polygon<f64>);

/// Opaque type that represents a list of [gh_polygon], returned as the result of a boolean
/// operation.
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct gh_polygonlist(pub Vec<gh_polygon>);

impl gh_polygonlist {
    pub fn from_internal<I>(polygons: I) -> *mut gh_polygonlist
    where
        I: IntoIterator<Item = Polygon>,
    {
        let r = polygons.into_iter().map(gh_polygon).collect();
        Box::into_raw(Box::new(gh_polygonlist(r)))
    }
}

/// FFI representation of [BooleanOptions].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct gh_boolean_o {
    pub epsilon: f64,
    pub max_split_depth: u32,
}

impl gh_boolean_o {
    /// Convert FFI boolean options type to internal type.
    pub fn to_internal(&self) -> BooleanOptions<'static, f64> {
        let mut options = BooleanOptions::new();
        options.epsilon = self.epsilon;
        options.max_split_depth = self.max_split_depth as usize;
        options
    }
}

impl Default for gh_boolean_o {
    fn default() -> Self {
        let d = BooleanOptions::<f64>::default();
        Self {
            epsilon: d.epsilon,
            max_split_depth: u32::try_from(d.max_split_depth).unwrap_or(u32::MAX),
        }
    }
}

/// Write default option values to a [gh_boolean_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_boolean_o_init(options: *mut gh_boolean_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            return 1;
        }

        options.write(Default::default());
        0
    })
}

fn boolean_op_from_u32(i: u32) -> Option<BooleanOp> {
    match i {
        0 => Some(BooleanOp::Intersect),
        1 => Some(BooleanOp::Union),
        2 => Some(BooleanOp::Difference),
        _ => None,
    }
}

/// Create a new polygon object.
///
/// `points` is an array of [gh_point] to create the polygon with (may be null if `n_points` is 0).
/// `n_points` contains the number of points in the array.
/// `polygon` is an out parameter to hold the created polygon.
///
/// # Safety
///
/// `points` may be null if `n_points` is 0 or must point to a valid contiguous buffer of
/// [gh_point] with length of at least `n_points`.
/// `polygon` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_polygon_create(
    points: *const gh_point,
    n_points: u32,
    polygon: *mut *const gh_polygon,
) -> i32 {
    ffi_catch_unwind!({
        let mut result = Polygon::new();
        if !points.is_null() && n_points != 0 {
            let data = slice::from_raw_parts(points, n_points as usize);
            result.points.reserve(data.len());
            for p in data {
                result.add(p.x, p.y);
            }
        }

        polygon.write(Box::into_raw(Box::new(gh_polygon(result))));
        0
    })
}

/// Free an existing [gh_polygon] object.
///
/// Nothing happens if `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid gh_polygon object that was created with [gh_polygon_create]
/// and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn gh_polygon_f(polygon: *mut gh_polygon) {
    if !polygon.is_null() {
        drop(Box::from_raw(polygon))
    }
}

/// Get the point count of a polygon.
///
/// `count` used as out parameter to hold the point count.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid gh_polygon object that has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_polygon_get_vertex_count(
    polygon: *const gh_polygon,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        // using try_from to catch odd case of point count greater than u32::MAX to prevent memory
        // corruption/access errors but just panic as internal error if it does occur
        count.write(u32::try_from((*polygon).0.vertex_count()).unwrap());
        0
    })
}

/// Fills the buffer given with the points of a polygon.
///
/// You must use [gh_polygon_get_vertex_count] to ensure the buffer given has adequate length to be
/// filled with all points!
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid gh_polygon object that has not been freed.
/// `points` must point to a buffer that can be filled with all `polygon` points.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_polygon_get_points(
    polygon: *const gh_polygon,
    points: *mut gh_point,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        let src = &(*polygon).0.points;
        let buffer = slice::from_raw_parts_mut(points, src.len());
        for (dst, &p) in buffer.iter_mut().zip(src.iter()) {
            *dst = gh_point::from_internal(p);
        }
        0
    })
}

/// Get the signed area of a polygon (positive if counter clockwise).
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid gh_polygon object that has not been freed.
/// `area` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_polygon_get_area(polygon: *const gh_polygon, area: *mut f64) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        area.write((*polygon).0.area());
        0
    })
}

/// Wraps [Polygon::boolean_opt].
///
/// `options` is allowed to be null (default options will be used).
///
/// Boolean operations are:
/// * 0 = [BooleanOp::Intersect]
/// * 1 = [BooleanOp::Union]
/// * 2 = [BooleanOp::Difference]
///
/// `result` holds the result components, an empty result is a list holding a single polygon with
/// zero points.
///
/// ## Specific Error Codes
/// * 1 = `subject` and/or `clip` is null.
/// * 2 = `operation` is unrecognized (must be one of the values listed).
/// * 3 = `subject` or `clip` has 1 or 2 points (see [gh_last_error_message]).
///
/// # Safety
///
/// `subject` and `clip` must each be null or a valid gh_polygon object that has not been freed.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_polygon_boolean(
    subject: *const gh_polygon,
    clip: *const gh_polygon,
    operation: u32,
    options: *const gh_boolean_o,
    result: *mut *const gh_polygonlist,
) -> i32 {
    ffi_catch_unwind!({
        clear_last_error();
        if subject.is_null() || clip.is_null() {
            set_last_error("subject and clip must not be null", "gh_polygon_boolean");
            return 1;
        }

        let op = match boolean_op_from_u32(operation) {
            Some(op) => op,
            None => {
                set_last_error(
                    format!("unrecognized boolean operation: {operation}"),
                    "gh_polygon_boolean".to_string(),
                );
                return 2;
            }
        };

        let options = if options.is_null() {
            BooleanOptions::new()
        } else {
            (*options).to_internal()
        };

        match (*subject).0.boolean_opt(&(*clip).0, op, &options) {
            Ok(r) => {
                result.write(gh_polygonlist::from_internal(r.polygons));
                0
            }
            Err(e @ ClipError::InsufficientVertices { .. }) => {
                set_last_error(e.to_string(), "gh_polygon_boolean".to_string());
                3
            }
        }
    })
}

/// Free an existing [gh_polygonlist] object and all [gh_polygon] owned by it.
///
/// Nothing happens if `polygonlist` is null.
///
/// # Safety
///
/// `polygonlist` must be null or a valid [gh_polygonlist] object.
#[no_mangle]
pub unsafe extern "C" fn gh_polygonlist_f(polygonlist: *mut gh_polygonlist) {
    if !polygonlist.is_null() {
        drop(Box::from_raw(polygonlist))
    }
}

/// Get the number of polygons inside a [gh_polygonlist].
///
/// `count` used as out parameter to hold the polygon count.
///
/// ## Specific Error Codes
/// * 1 = `polygonlist` is null.
///
/// # Safety
///
/// `polygonlist` must be null or a valid [gh_polygonlist] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_polygonlist_get_count(
    polygonlist: *const gh_polygonlist,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if polygonlist.is_null() {
            return 1;
        }

        count.write(u32::try_from((*polygonlist).0.len()).unwrap());
        0
    })
}

/// Get a polygon at the given index position in the [gh_polygonlist].
///
/// `polygon` used as out parameter to hold the polygon pointer. The polygon remains owned by the
/// list and must not be freed on its own, it is valid until the list is freed.
///
/// ## Specific Error Codes
/// * 1 = `polygonlist` is null.
/// * 2 = `position` out of range for the [gh_polygonlist].
///
/// # Safety
///
/// `polygonlist` must be null or a valid [gh_polygonlist] object.
/// `polygon` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_polygonlist_get_polygon(
    polygonlist: *const gh_polygonlist,
    position: u32,
    polygon: *mut *const gh_polygon,
) -> i32 {
    ffi_catch_unwind!({
        if polygonlist.is_null() {
            return 1;
        }

        match (&(*polygonlist).0).get(position as usize) {
            Some(p) => {
                polygon.write(p as *const gh_polygon);
                0
            }
            None => 2,
        }
    })
}

/// Get the message of the last error set on the current thread by [gh_polygon_boolean].
///
/// `msg` used as out parameter to hold a null terminated string pointer, it is null if no error was
/// set. The string is owned by the library and valid until the next call to [gh_polygon_boolean] on
/// the same thread.
///
/// ## Specific Error Codes
/// * 1 = `msg` is null.
///
/// # Safety
///
/// `msg` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_last_error_message(msg: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        if msg.is_null() {
            return 1;
        }

        let ptr = LAST_ERROR.with(|last_error| match last_error.borrow().as_ref() {
            Some(e) => e.error_msg.as_ptr(),
            None => std::ptr::null(),
        });
        msg.write(ptr);
        0
    })
}

/// Get the name of the function that set the last error on the current thread.
///
/// `function` used as out parameter to hold a null terminated string pointer, it is null if no
/// error was set. Same lifetime as the string from [gh_last_error_message].
///
/// ## Specific Error Codes
/// * 1 = `function` is null.
///
/// # Safety
///
/// `function` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn gh_last_error_function(function: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        if function.is_null() {
            return 1;
        }

        let ptr = LAST_ERROR.with(|last_error| match last_error.borrow().as_ref() {
            Some(e) => e.function.as_ptr(),
            None => std::ptr::null(),
        });
        function.write(ptr);
        0
    })
}
