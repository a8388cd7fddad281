//! Output formatting for the resource count.
//!
//! - [`terminal`] - Report text for stdout

mod terminal;

pub use terminal::{
    format_census, format_failures, format_report_header, format_subscription_header,
    format_summary, print_failure, print_report_header, print_subscription_footer,
    print_subscription_header, print_summary, BANNER,
};
