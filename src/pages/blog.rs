//! Blog index page

use maud::{html, Markup};

use crate::components::{blog_posts, RenderContext};

use super::{Metadata, Page};

pub const BLOG_TITLE: &str = "Blog";
pub const BLOG_DESCRIPTION: &str = "Read my blog.";

const HEADING_CLASS: &str =
    "font-semibold text-2xl mb-8 tracking-tighter text-[#4b7d08] dark:text-[#72a336]";

pub struct BlogIndexPage;

impl Page for BlogIndexPage {
    fn route(&self) -> &'static str {
        "/blog"
    }

    fn metadata(&self) -> Option<Metadata> {
        Some(Metadata::new(BLOG_TITLE, BLOG_DESCRIPTION))
    }

    fn render(&self, ctx: &RenderContext) -> Markup {
        html! {
            section {
                h1 class=(HEADING_CLASS) {
                    "My Blog"
                }
                (blog_posts(ctx))
            }
        }
    }
}
