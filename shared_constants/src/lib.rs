pub const MODULE_ID: &str = "wc/ui/backToTop";
pub const DEFAULT_MIN_SCROLL: u32 = 0;

pub const LINK_TAG: &str = "a";
pub const LINK_CLASS: &str = "wc_btt";
pub const LINK_HREF: &str = "#";
pub const ICON_CLASSES: &str = "fa fa-chevron-circle-up fa-5x";
pub const OFFSCREEN_CLASS: &str = "wc-off";
pub const LABEL_KEY: &str = "back_to_top";

pub const CONFIG_GLOBAL: &str = "wcconfig";
pub const I18N_GLOBAL: &str = "wcI18n";

pub const SHED_SHOW_EVENT: &str = "wc.shed.show";
pub const SHED_HIDE_EVENT: &str = "wc.shed.hide";

pub const FOCUSABLE_QUERY: &str =
    "a[href], area[href], button, input, select, textarea, iframe, [tabindex]:not([tabindex='-1'])";
