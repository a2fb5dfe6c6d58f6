//! Marker types.

/// Marker type describing a check-in.
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker type describing a check-out.
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;

/// Marker type describing a payment.
#[derive(Clone, Copy, Debug)]
pub struct Payment;
