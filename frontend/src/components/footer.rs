use chrono::Datelike;
use yew::prelude::*;

use crate::pages::site_content::{FooterContent, NavLink};

pub fn copyright_line(content: &FooterContent, year: i32) -> String {
    content
        .copyright
        .clone()
        .unwrap_or_else(|| format!("© {} {}. All rights reserved.", year, content.company_name))
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: FooterContent,
}

#[function_component]
pub fn Footer(props: &FooterProps) -> Html {
    let content = &props.content;
    let year = chrono::Local::now().year();

    let column = |title: &str, links: &[NavLink]| {
        html! {
            <div class="footer-column">
                <h4>{title}</h4>
                <ul>
                    {
                        for links.iter().map(|link| html! {
                            <li><a href={link.href.clone()}>{&link.name}</a></li>
                        })
                    }
                </ul>
            </div>
        }
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <h3 class="footer-brand">{&content.company_name}</h3>
                    <p>{&content.tagline}</p>
                    <p>{&content.address}</p>
                    <a href={format!("mailto:{}", content.email)}>{&content.email}</a>
                </div>
                { column("Quick Links", &content.quick_links) }
                { column("Resources", &content.resources) }
                { column("Legal", &content.legal) }
            </div>
            <div class="footer-bottom">
                <span>{copyright_line(content, year)}</span>
                <div class="social-links">
                    {
                        for content.social_media.iter().map(|social| html! {
                            <a href={social.url.clone()} target="_blank" rel="noopener noreferrer"
                                class={classes!("social-link", social.icon.clone())}>
                                {&social.name}
                            </a>
                        })
                    }
                </div>
            </div>
        </footer>
    }
}
