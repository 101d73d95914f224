//! Native entry points loaded by the React Native host.
//!
//! The JVM resolves `Java_com_teardown_reactnative_ReactNativeModule_*`
//! symbols against the `native` methods declared on
//! `com.teardown.reactnative.ReactNativeModule`. The `teardown_*` symbols are
//! the plain C ABI for hosts that link the static library instead.

use std::ffi::c_void;

use crate::arith;
use crate::common::{self, BridgeCode};

/// ABI version to coordinate with the host bindings.
pub const API_VERSION: u32 = 1;

/// Version reported back from `JNI_OnLoad`.
pub const JNI_VERSION_1_6: jint = 0x0001_0006;

#[allow(non_camel_case_types)]
pub type jint = i32;
#[allow(non_camel_case_types)]
pub type jdouble = f64;

/// Opaque `JNIEnv*`; never dereferenced here.
pub type JniEnv = *mut c_void;
/// Opaque `jclass` handle.
pub type JClass = *mut c_void;
/// Opaque `JavaVM*`.
pub type JavaVm = *mut c_void;

/// Called by the JVM when `System.loadLibrary` maps this library.
///
/// Logging setup is best effort: the host may already own the global
/// subscriber, and multiplication works either way. A failure is silent here
/// since no subscriber of ours exists to report it; C hosts get the code from
/// `teardown_init`.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVm, _reserved: *mut c_void) -> jint {
    let _ = common::init();
    JNI_VERSION_1_6
}

/// `static native double nativeMultiply(double a, double b)`
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_teardown_reactnative_ReactNativeModule_nativeMultiply(
    _env: JniEnv,
    _class: JClass,
    a: jdouble,
    b: jdouble,
) -> jdouble {
    arith::multiply(a, b)
}

/// ABI version probe for C hosts.
#[no_mangle]
pub extern "C" fn teardown_api_version() -> u32 {
    API_VERSION
}

/// Read configuration and install logging. Safe to call repeatedly.
#[no_mangle]
pub extern "C" fn teardown_init() -> u32 {
    BridgeCode::from(&common::init()) as u32
}

/// C ABI twin of `nativeMultiply`.
#[no_mangle]
pub extern "C" fn teardown_multiply(a: f64, b: f64) -> f64 {
    arith::multiply(a, b)
}
