//! Result card for one recommended restaurant.

use common::recommendation::Restaurant;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_image_icons::MdPhotoCamera, md_social_icons::MdPublic}};


/// `raw` if it is an absolute http(s) URL, otherwise nothing to link to.
pub fn safe_link(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = url::Url::parse(raw).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(raw.to_string()),
        _ => None,
    }
}

#[component]
pub fn RestaurantCard(restaurant: Restaurant) -> Element {
    let website = safe_link(&restaurant.website_url);
    let instagram = safe_link(&restaurant.instagram_url);

    rsx! {
        div {
            class: "card-custom",
            style: "
                display: flex;
                flex-direction: row;
                align-items: stretch;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 8px;
                margin: 12px 0px;
                min-height: 220px;
                overflow: hidden;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            div {
                class: "card-body",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 16px 20px;
                    width: 66%;
                    box-sizing: border-box;
                ",
                h5 {
                    class: "card-title",
                    style: "font-size: 22px; font-weight: 500; margin: 0px;",
                    "{restaurant.name}"
                }
                p {
                    class: "card-text",
                    style: "font-size: 16px; line-height: 23px; color: rgb(0, 0, 0);",
                    "{restaurant.summary}"
                }
            }
            div {
                style: "
                    position: relative;
                    width: 34%;
                ",
                img {
                    class: "card-img",
                    src: "{restaurant.image_url}",
                    alt: "{restaurant.name} image",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                div {
                    class: "info-overlay",
                    InfoLine { label: "Type".to_string(), value: restaurant.restaurant_type_or_placeholder().to_string() }
                    InfoLine { label: "District".to_string(), value: restaurant.district_or_placeholder().to_string() }
                    InfoLine { label: "Maaltijdtype".to_string(), value: restaurant.meal_type_or_placeholder().to_string() }
                    InfoLine { label: "Prijsniveau".to_string(), value: restaurant.price_level_or_placeholder().to_string() }
                    div {
                        style: "display: flex; flex-direction: row; gap: 14px; margin-top: 12px;",
                        if let Some(href) = website {
                            a {
                                class: "icon-custom",
                                href: "{href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { icon: MdPublic, style: "width: 24px; height: 24px;" }
                            }
                        }
                        if let Some(href) = instagram {
                            a {
                                class: "icon-custom",
                                href: "{href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { icon: MdPhotoCamera, style: "width: 24px; height: 24px;" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InfoLine(label: String, value: String) -> Element {
    rsx! {
        p {
            style: "margin: 2px 0px;",
            strong { "{label}:" }
            " {value}"
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn render_card(restaurant: Restaurant) -> String {
        let mut dom = VirtualDom::new_with_props(RestaurantCard, RestaurantCardProps { restaurant });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn restaurant() -> Restaurant {
        Restaurant {
            name: "Bak".to_string(),
            summary: "Seizoensgebonden menu".to_string(),
            image_url: "https://example.org/bak.jpg".to_string(),
            website_url: String::new(),
            instagram_url: String::new(),
            restaurant_type: "Bistro".to_string(),
            district: String::new(),
            meal_type: String::new(),
            price_level: String::new(),
        }
    }

    #[test]
    fn only_http_links_are_rendered() {
        assert_eq!(safe_link(" https://bak.nl "), Some("https://bak.nl".to_string()));
        assert_eq!(safe_link("http://bak.nl/menu"), Some("http://bak.nl/menu".to_string()));
        assert_eq!(safe_link("javascript:alert(1)"), None);
        assert_eq!(safe_link("bak.nl"), None);
        assert_eq!(safe_link(""), None);
    }

    #[test]
    fn missing_optional_fields_show_placeholder() {
        let html = render_card(restaurant());
        assert!(html.contains("Bistro"));
        assert_eq!(html.matches("Niet beschikbaar").count(), 3);
        assert!(html.contains("Bak image"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn links_render_when_present() {
        let mut r = restaurant();
        r.website_url = "https://bak.nl".to_string();
        r.instagram_url = "javascript:void(0)".to_string();
        let html = render_card(r);
        assert!(html.contains("href=\"https://bak.nl\""));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn text_is_escaped() {
        let mut r = restaurant();
        r.summary = "<script>alert(1)</script>".to_string();
        let html = render_card(r);
        assert!(!html.contains("<script>"));
    }
}
