// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for invoking operations

/// Standard errors in Tock.
///
/// Hardware operations return `Result<T, ErrorCode>`. There is no success
/// variant; successful calls return `Ok`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition
    FAIL = 1,
    /// The component is powered down or its clock is not routed
    OFF = 2,
    /// The hardware is not in a state that permits the request
    NOPERM = 3,
    /// An invalid parameter was passed
    INVAL = 4,
    /// Device does not exist
    NODEVICE = 5,
}

impl ErrorCode {
    /// Negative errno value for callers that speak the C bootloader ABI.
    pub const fn to_errno(self) -> i32 {
        match self {
            ErrorCode::FAIL => -1,
            ErrorCode::NOPERM => -1,
            ErrorCode::NODEVICE => -2,
            ErrorCode::OFF => -5,
            ErrorCode::INVAL => -22,
        }
    }
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl From<ErrorCode> for Result<(), ErrorCode> {
    fn from(ec: ErrorCode) -> Self {
        Err(ec)
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn numeric_values_are_stable() {
        assert_eq!(usize::from(ErrorCode::FAIL), 1);
        assert_eq!(usize::from(ErrorCode::OFF), 2);
        assert_eq!(usize::from(ErrorCode::NOPERM), 3);
        assert_eq!(usize::from(ErrorCode::INVAL), 4);
        assert_eq!(usize::from(ErrorCode::NODEVICE), 5);
    }

    #[test]
    fn errno_mapping() {
        assert_eq!(ErrorCode::INVAL.to_errno(), -22);
        assert_eq!(ErrorCode::NOPERM.to_errno(), -1);
        assert_eq!(ErrorCode::OFF.to_errno(), -5);
        assert_eq!(ErrorCode::NODEVICE.to_errno(), -2);
    }

    #[test]
    fn into_result() {
        let r: Result<(), ErrorCode> = ErrorCode::OFF.into();
        assert_eq!(r, Err(ErrorCode::OFF));
    }
}
