//! C-API Bindings
//!
//! Exposes the hash to C/C++ via FFI with pointer safety and panic
//! boundaries.

#![allow(unsafe_code)]

use crate::oneshot;

use std::ptr;
use std::slice;

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute the `CryptoNight` hash.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes
/// - `output_ptr` must be valid for 32 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn cryptonight_hash(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    if input_ptr.is_null() || output_ptr.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let input = slice::from_raw_parts(input_ptr, input_len);
        let hash = oneshot::hash(input);
        std::ptr::copy_nonoverlapping(hash.as_ptr(), output_ptr, 32);
    });

    match result {
        Ok(()) => 0,
        Err(_) => -2,
    }
}

/// Verify data against an expected hash in constant time.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes
/// - `hash_ptr` must point to exactly 32 bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn cryptonight_verify(
    input_ptr: *const u8,
    input_len: usize,
    hash_ptr: *const u8,
) -> i32 {
    if input_ptr.is_null() || hash_ptr.is_null() {
        return -1;
    }

    let result = std::panic::catch_unwind(|| {
        let input = slice::from_raw_parts(input_ptr, input_len);
        let hash_slice = slice::from_raw_parts(hash_ptr, 32);
        let mut hash = [0u8; crate::kernels::constants::HASH_SIZE];
        hash.copy_from_slice(hash_slice);
        oneshot::verify(input, &hash)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => -2,
    }
}

// =============================================================================
// STREAMING API
// =============================================================================

/// Opaque hasher handle for C.
pub struct CnHasherPtr(crate::streaming::CnHasher);

/// Create a new hasher. Caller must free with `cryptonight_hasher_free`
/// or finalize with `cryptonight_hasher_finalize`.
#[no_mangle]
pub extern "C" fn cryptonight_hasher_new() -> *mut CnHasherPtr {
    Box::into_raw(Box::new(CnHasherPtr(crate::streaming::CnHasher::new())))
}

/// Feed data into the hasher.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `cryptonight_hasher_new`
/// - `data_ptr` must be valid for `len` bytes
#[no_mangle]
pub unsafe extern "C" fn cryptonight_hasher_update(
    state_ptr: *mut CnHasherPtr,
    data_ptr: *const u8,
    len: usize,
) {
    if state_ptr.is_null() || data_ptr.is_null() {
        return;
    }
    let hasher = &mut (*state_ptr).0;
    let data = slice::from_raw_parts(data_ptr, len);
    hasher.update(data);
}

/// Finalize and write the hash. Frees the hasher automatically; do not
/// call `cryptonight_hasher_free` after this.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `cryptonight_hasher_new`
/// - `out_ptr` must be valid for 32 writable bytes
#[no_mangle]
pub unsafe extern "C" fn cryptonight_hasher_finalize(
    state_ptr: *mut CnHasherPtr,
    out_ptr: *mut u8,
) {
    if state_ptr.is_null() || out_ptr.is_null() {
        return;
    }
    let boxed = Box::from_raw(state_ptr);
    let hash = boxed.0.finalize();
    ptr::copy_nonoverlapping(hash.as_ptr(), out_ptr, 32);
}

/// Free a hasher without finalizing.
///
/// # Safety
/// - `state_ptr` must be a valid pointer obtained from `cryptonight_hasher_new`, or null
#[no_mangle]
pub unsafe extern "C" fn cryptonight_hasher_free(state_ptr: *mut CnHasherPtr) {
    if !state_ptr.is_null() {
        let _ = Box::from_raw(state_ptr);
    }
}

/// Get the name of the active backend.
///
/// # Returns
/// A pointer to a static, null-terminated C string (`"aes-ni"` or
/// `"portable"`). Must NOT be freed by the caller.
#[no_mangle]
pub extern "C" fn cryptonight_backend_name() -> *const std::os::raw::c_char {
    let name: &'static str = match crate::active_backend() {
        "aes-ni" => "aes-ni\0",
        _ => "portable\0",
    };
    name.as_ptr().cast::<std::os::raw::c_char>()
}
