// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight Event State: small input state machines for remote-control UIs.
//!
//! - [`accelerator`]: turns raw key-down/key-up edges into a repeating stream of key events
//!   whose rate grows the longer a key is held ("slow start, fast scroll").
//!
//! State machines here never read a clock or schedule timers themselves. Callers pass
//! timestamps in milliseconds and ask when the next repeat is due, then drive the machine
//! from whatever timer their runtime offers.
//!
//! This crate is `no_std`.

#![no_std]

pub mod accelerator;
