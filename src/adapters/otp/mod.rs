//! OTP adapters - `OtpRepository` implementations.

mod in_memory;

pub use in_memory::InMemoryOtpRepository;
