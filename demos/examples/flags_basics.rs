// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flag basics.
//!
//! Declares a flag type, extends the built-in window flags at start-up, and
//! shows printing, parsing, and registry-relative complement.
//!
//! Run:
//! - `cargo run -p understory_demos --example flags_basics`

use understory_flags::{FlagSet, FlagType};
use understory_window::WindowFlag;

understory_flags::flag_type! {
    /// Panels a game screen can show.
    pub struct Panel: u8 {
        /// Production queue.
        const PRODUCTION = 1 << 0;
        /// Research tree.
        const RESEARCH = 1 << 1;
        /// Galaxy map.
        const MAP = 1 << 2;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let open = Panel::PRODUCTION | Panel::MAP;
    tracing::info!(%open, closed = %!open, "panels");

    let parsed: FlagSet<Panel> = "RESEARCH | MAP".parse().expect("registered names");
    tracing::info!(?parsed, overlap = %(parsed & open), "parsed panels");

    // Application-specific window capability, registered before use.
    let resizes_children = WindowFlag::try_new(1 << 7).expect("single bit");
    WindowFlag::spec()
        .insert(resizes_children, "RESIZES_CHILDREN")
        .expect("free bit and name");
    let flags = WindowFlag::INTERACTIVE | resizes_children;
    tracing::info!(%flags, registered = WindowFlag::spec().len(), "window flags");

    match WindowFlag::spec().insert(resizes_children, "AGAIN") {
        Ok(()) => tracing::warn!("duplicate registration accepted"),
        Err(err) => tracing::info!(%err, "duplicate registration rejected"),
    }
}
