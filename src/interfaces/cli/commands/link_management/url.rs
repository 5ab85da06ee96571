//! Print the public short URL for a code

use crate::runtime::lifetime::DashboardContext;

pub fn print_short_url(ctx: &DashboardContext, code: &str) {
    println!("{}", ctx.view.resolver().resolve(code));
}
