// Document shell every page renders inside

use async_trait::async_trait;
use maud::{html, Markup, DOCTYPE};

use super::{RouteModule, RouteView};
use crate::error::RouteResult;

pub struct Root;

#[async_trait]
impl RouteModule for Root {
    fn file(&self) -> &'static str {
        "root.tsx"
    }

    fn render(&self, view: &RouteView<'_>, outlet: Markup) -> RouteResult<Markup> {
        Ok(html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width,initial-scale=1";
                    title { (view.title) }
                }
                body {
                    header {
                        nav {
                            a href="/" { "Home" } " | "
                            a href="/products" { "Products" } " | "
                            a href="/docs" { "Docs" } " | "
                            a href="/dashboard" { "Dashboard" } " | "
                            a href="/account" { "Account" } " | "
                            a href="/debug-routes" { "Debug" }
                        }
                    }
                    main { (outlet) }
                }
            }
        })
    }
}
