use shared_constants::{LINK_CLASS, OFFSCREEN_CLASS};

/// Placement of the back to top link and the off-screen label.
pub fn stylesheet() -> String {
    format!(
        ".{LINK_CLASS}{{position:fixed;right:1rem;bottom:1rem;z-index:1000}}\
         .{LINK_CLASS}[hidden]{{display:none}}\
         .{OFFSCREEN_CLASS}{{position:absolute;width:1px;height:1px;margin:-1px;\
         overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap}}"
    )
}
