// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Share, copy, and download flows through a `ViewerHost`.
//!
//! Runs the viewer's controls first against a host that succeeds, then
//! against one that fails, showing the transient status either way.
//!
//! Run:
//! - `cargo run -p lightbox_demos --example share_actions`

use lightbox_demos::{OfflineHost, PrintHost};
use lightbox_viewer::Viewer;

fn main() {
    let mut viewer = Viewer::new("https://example.com/renders/armchair.png?size=large");
    viewer.set_share_target(Some("https://example.com/view/armchair"));

    // A fake clock is fine: the viewer only compares timestamps.
    let mut now = 0_u64;

    let mut host = PrintHost;
    now += 250;
    viewer.copy_link(&mut host, now);
    println!("status: {:?}", viewer.status(now));
    now += 250;
    viewer.share_by_mail(&mut host, now);
    now += 250;
    viewer.share_by_whatsapp(&mut host, now);
    now += 250;
    viewer.download_image(&mut host, now);
    println!("status after download: {:?}", viewer.status(now));
    viewer.request_new_view(&mut host);

    println!();
    println!("same controls against a host that fails:");
    let mut offline = OfflineHost;
    now += 250;
    viewer.copy_link(&mut offline, now);
    println!("status: {:?}", viewer.status(now));
    now += 250;
    viewer.copy_image_to_clipboard(&mut offline, now);
    println!("status: {:?}", viewer.status(now));
    now += 250;
    viewer.download_image(&mut offline, now);
    println!("status: {:?}", viewer.status(now));

    // Host trouble never touches the view itself.
    let t = viewer.transform();
    println!(
        "transform untouched: scale={} offset=({}, {})",
        t.scale, t.x, t.y
    );
}
