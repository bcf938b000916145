// `rss[.]xml`: RSS 2.0 feed at `/rss.xml`

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::RouteModule;
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::{ResourceResponse, RouteOutput};
use crate::services::StorefrontClient;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
}

/// RFC 1123 date as used by `pubDate`
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn feed_items(store_domain: &str, now: DateTime<Utc>) -> Vec<FeedItem> {
    vec![
        FeedItem {
            title: "New Product Launch".to_string(),
            link: format!("{}/products/new-product", store_domain),
            description: "Check out our latest product".to_string(),
            pub_date: http_date(now),
        },
        FeedItem {
            title: "Summer Sale Starts Now".to_string(),
            link: format!("{}/collections/summer-sale", store_domain),
            description: "Up to 50% off on selected items".to_string(),
            pub_date: http_date(now - Duration::days(1)),
        },
    ]
}

pub fn render_feed(storefront: &dyn StorefrontClient, items: &[FeedItem]) -> String {
    let items_xml: String = items
        .iter()
        .map(|item| {
            format!(
                "\n    <item>\n      <title>{}</title>\n      <link>{}</link>\n      <description>{}</description>\n      <pubDate>{}</pubDate>\n    </item>",
                escape_xml(&item.title),
                escape_xml(&item.link),
                escape_xml(&item.description),
                escape_xml(&item.pub_date),
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>{}</title>
    <link>{}</link>
    <description>Latest updates from our store</description>
    <language>en</language>{}
  </channel>
</rss>"#,
        escape_xml(storefront.shop_name()),
        escape_xml(storefront.store_domain()),
        items_xml,
    )
}

pub struct RssFeed;

#[async_trait]
impl RouteModule for RssFeed {
    fn file(&self) -> &'static str {
        "rss[.]xml.tsx"
    }

    fn is_resource(&self) -> bool {
        true
    }

    async fn loader(&self, ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        let storefront = ctx.services.storefront.as_ref();
        let items = feed_items(storefront.store_domain(), Utc::now());
        let response = ResourceResponse::xml(render_feed(storefront, &items))
            .header("Cache-Control", "public, max-age=3600");
        Some(Ok(response.into()))
    }
}
