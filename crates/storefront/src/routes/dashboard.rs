//! `/dashboard` and its children
//!
//! `dashboard` is a layout route with no loader. Its children render inside
//! it: `dashboard._index` at `/dashboard`, `dashboard.settings` and
//! `dashboard.analytics` one segment deeper.

use async_trait::async_trait;
use maud::{html, Markup};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ActionResult, RouteModule, RouteView};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::RouteOutput;

// ============================================================================
// Layout
// ============================================================================

pub struct DashboardLayout;

#[async_trait]
impl RouteModule for DashboardLayout {
    fn file(&self) -> &'static str {
        "dashboard.tsx"
    }

    fn render(&self, view: &RouteView<'_>, outlet: Markup) -> RouteResult<Markup> {
        let links = [
            ("/dashboard", "Overview"),
            ("/dashboard/settings", "Settings"),
            ("/dashboard/analytics", "Analytics"),
            ("/dashboard/profile", "Profile"),
        ];

        Ok(html! {
            div class="dashboard-layout" {
                h1 { "Dashboard Layout" }
                p { "Route file: " code { "app/routes/dashboard.tsx" } }
                p { "Type: " strong { "Layout Route (with Outlet)" } }
                p { "Current path: " code { (view.location.pathname) } }

                div class="dashboard-body" {
                    nav class="dashboard-nav" {
                        h3 { "Dashboard Nav" }
                        ul {
                            @for (href, label) in links {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                    main { (outlet) }
                }

                div class="dashboard-footer" {
                    a href="/" { "← Back to Home" }
                }
            }
        })
    }
}

// ============================================================================
// Overview
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_orders: u32,
    pub total_revenue: String,
    pub active_customers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewData {
    pub stats: Stats,
}

pub fn load_overview() -> OverviewData {
    OverviewData {
        stats: Stats {
            total_orders: 142,
            total_revenue: "$12,450".to_string(),
            active_customers: 89,
        },
    }
}

pub struct DashboardIndex;

#[async_trait]
impl RouteModule for DashboardIndex {
    fn file(&self) -> &'static str {
        "dashboard._index.tsx"
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load_overview()))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let OverviewData { stats } = view.data()?;

        Ok(html! {
            div class="dashboard-overview" {
                h2 { "Dashboard Overview" }
                p { "Route file: " code { "app/routes/dashboard._index.tsx" } }
                p { "URL: " code { "/dashboard" } }
                p { "Type: " strong { "Nested Index Route (inside Layout)" } }

                div class="stats" {
                    (stat_card("Total Orders", &stats.total_orders.to_string()))
                    (stat_card("Revenue", &stats.total_revenue))
                    (stat_card("Customers", &stats.active_customers.to_string()))
                }
            }
        })
    }
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub email: String,
    pub notifications: bool,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsData {
    pub settings: Settings,
}

pub fn load_settings() -> SettingsData {
    SettingsData {
        settings: Settings {
            email: "user@example.com".to_string(),
            notifications: true,
            theme: "light".to_string(),
        },
    }
}

pub struct DashboardSettings;

#[async_trait]
impl RouteModule for DashboardSettings {
    fn file(&self) -> &'static str {
        "dashboard.settings.tsx"
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load_settings()))
    }

    async fn action(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        let form = &ctx.form;
        info!(
            email = ?form.get("email"),
            notifications = form.get("notifications").is_some_and(|v| v == "on"),
            theme = ?form.get("theme"),
            "saving dashboard settings"
        );

        Some(RouteOutput::data(&ActionResult::ok("Settings saved successfully!")))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let SettingsData { settings } = view.data()?;
        let flash = view.action::<ActionResult>()?.and_then(ActionResult::flash);

        Ok(html! {
            div class="dashboard-settings" {
                h2 { "Settings" }
                p { "Route file: " code { "app/routes/dashboard.settings.tsx" } }
                p { "URL: " code { "/dashboard/settings" } }
                p { "Type: " strong { "Nested Route under Layout" } }

                @if let Some(message) = &flash {
                    div class="flash success" { (message) }
                }

                form method="post" {
                    div {
                        label { "Email:" br; input type="email" name="email" value=(settings.email); }
                    }
                    div {
                        label {
                            input type="checkbox" name="notifications" checked[settings.notifications];
                            " Enable notifications"
                        }
                    }
                    div {
                        label {
                            "Theme:" br;
                            select name="theme" {
                                option value="light" selected[settings.theme == "light"] { "Light" }
                                option value="dark" selected[settings.theme == "dark"] { "Dark" }
                            }
                        }
                    }
                    button type="submit" { "Save Settings" }
                }
            }
        })
    }
}

// ============================================================================
// Analytics
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub page_views: u64,
    pub unique_visitors: u64,
    pub bounce_rate: String,
    pub avg_session_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub analytics: Analytics,
}

pub fn load_analytics() -> AnalyticsData {
    AnalyticsData {
        analytics: Analytics {
            page_views: 15420,
            unique_visitors: 3241,
            bounce_rate: "42%".to_string(),
            avg_session_duration: "3m 24s".to_string(),
        },
    }
}

/// `15420` → `15,420`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

pub struct DashboardAnalytics;

#[async_trait]
impl RouteModule for DashboardAnalytics {
    fn file(&self) -> &'static str {
        "dashboard.analytics.tsx"
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(RouteOutput::data(&load_analytics()))
    }

    fn render(&self, view: &RouteView<'_>, _outlet: Markup) -> RouteResult<Markup> {
        let AnalyticsData { analytics } = view.data()?;

        Ok(html! {
            div class="dashboard-analytics" {
                h2 { "Analytics" }
                p { "Route file: " code { "app/routes/dashboard.analytics.tsx" } }
                p { "URL: " code { "/dashboard/analytics" } }
                p { "Type: " strong { "Nested Route under Layout" } }

                div class="stats" {
                    (stat_card("Page Views", &group_thousands(analytics.page_views)))
                    (stat_card("Unique Visitors", &group_thousands(analytics.unique_visitors)))
                    (stat_card("Bounce Rate", &analytics.bounce_rate))
                    (stat_card("Avg. Session Duration", &analytics.avg_session_duration))
                }
            }
        })
    }
}

fn stat_card(label: &str, value: &str) -> Markup {
    html! {
        div class="card" {
            h3 { (label) }
            p class="stat" { (value) }
        }
    }
}
