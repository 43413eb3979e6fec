//! Test scenarios for the playground sequencing contract.

mod fail_fast;
mod payloads;
mod sequence;
