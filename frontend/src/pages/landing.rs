use yew::prelude::*;

use crate::cms::document::ContentDocument;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::sections::{About, Contact, Features, Hero, Services, WhySinad};
use crate::pages::site_content::{
    section_content, AboutContent, ContactContent, FeaturesContent, FooterContent, HeroContent,
    NavLinks, ServicesContent, WhySinadContent,
};

/// Every public section read out of one document.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteSections {
    pub nav_links: NavLinks,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub why_sinad: WhySinadContent,
    pub services: ServicesContent,
    pub features: FeaturesContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl SiteSections {
    pub fn read(doc: &ContentDocument) -> Self {
        Self {
            nav_links: section_content(doc, "navLinks"),
            hero: section_content(doc, "hero"),
            about: section_content(doc, "about"),
            why_sinad: section_content(doc, "whySinad"),
            services: section_content(doc, "services"),
            features: section_content(doc, "features"),
            contact: section_content(doc, "contact"),
            footer: section_content(doc, "footer"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: ContentDocument,
}

/// The public page, rendered from the committed document.
#[function_component]
pub fn Landing(props: &LandingProps) -> Html {
    let SiteSections {
        nav_links: NavLinks(links),
        hero,
        about,
        why_sinad,
        services,
        features,
        contact,
        footer,
    } = SiteSections::read(&props.content);

    html! {
        <div class="landing-page">
            <style>{LANDING_STYLES}</style>
            <Navbar links={links} />
            <main>
                <Hero content={hero} />
                <About content={about} />
                <WhySinad content={why_sinad} />
                <Services content={services} />
                <Features content={features} />
                <Contact content={contact} />
            </main>
            <Footer content={footer} />
        </div>
    }
}

const LANDING_STYLES: &str = r#"
    body { margin: 0; background: #000; color: #e5e7eb; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; }
    a { color: #34d399; text-decoration: none; }
    .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 20; padding: 16px 0; transition: background 0.3s; }
    .top-nav.scrolled { background: rgba(0, 0, 0, 0.9); border-bottom: 1px solid rgba(52, 211, 153, 0.2); }
    .nav-content { max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center; }
    .nav-logo { font-size: 1.5rem; font-weight: 700; color: #34d399; }
    .nav-right { display: flex; gap: 24px; align-items: center; }
    .nav-link, .nav-submenu-link { color: #e5e7eb; }
    .nav-link:hover, .nav-submenu-link:hover { color: #34d399; }
    .nav-dropdown { position: relative; }
    .nav-submenu { position: absolute; top: 100%; left: 0; display: flex; flex-direction: column; gap: 8px; padding: 12px 16px; background: #111827; border: 1px solid rgba(52, 211, 153, 0.2); border-radius: 6px; min-width: 10rem; }
    .burger-menu { display: none; background: none; border: none; cursor: pointer; flex-direction: column; gap: 4px; }
    .burger-menu span { display: block; width: 24px; height: 2px; background: #e5e7eb; }
    .hero-section { min-height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center; padding: 0 24px; background: radial-gradient(circle at top, rgba(5, 150, 105, 0.25), transparent 60%); }
    .hero-content { max-width: 900px; }
    .hero-title { font-size: 3rem; margin-bottom: 16px; }
    .hero-subtitle { color: #34d399; font-weight: 500; }
    .hero-buttons { display: flex; gap: 16px; justify-content: center; margin-top: 32px; }
    .button { padding: 12px 24px; border-radius: 6px; font-weight: 600; }
    .button.primary { background: #059669; color: #fff; border: none; cursor: pointer; }
    .button.secondary { border: 1px solid #34d399; color: #34d399; }
    .site-section { max-width: 1200px; margin: 0 auto; padding: 96px 24px; }
    .section-heading { text-align: center; }
    .section-heading h3 { color: #34d399; font-weight: 500; }
    .section-description { text-align: center; max-width: 720px; margin: 0 auto 48px; color: #9ca3af; }
    .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }
    .card { padding: 24px; border: 1px solid rgba(52, 211, 153, 0.2); border-radius: 8px; background: rgba(17, 24, 39, 0.6); }
    .card-icon { font-size: 2rem; }
    .reason-card { border-left: 4px solid #369b6d; }
    .feature-list { padding-left: 20px; color: #9ca3af; }
    .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 24px; margin-top: 48px; text-align: center; }
    .stat-value { font-size: 2.5rem; font-weight: 700; color: #34d399; }
    .cta-box { margin-top: 64px; padding: 40px; text-align: center; border-radius: 8px; background: rgba(5, 150, 105, 0.15); }
    .feature-rows { display: flex; flex-direction: column; gap: 48px; margin-bottom: 64px; }
    .feature-row { display: flex; gap: 48px; align-items: center; }
    .feature-row.reversed { flex-direction: row-reverse; }
    .feature-visual { flex: 1; min-height: 220px; border-radius: 8px; background: linear-gradient(135deg, rgba(5, 150, 105, 0.4), rgba(17, 24, 39, 0.8)); }
    .feature-text { flex: 1; }
    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; }
    .contact-form { display: flex; flex-direction: column; gap: 8px; }
    .contact-form input, .contact-form textarea { padding: 10px 12px; background: rgba(0, 0, 0, 0.4); border: 1px solid rgba(52, 211, 153, 0.2); border-radius: 6px; color: #fff; }
    .contact-ack { color: #34d399; }
    .social-links { display: flex; gap: 16px; }
    .site-footer { border-top: 1px solid rgba(52, 211, 153, 0.2); padding: 48px 24px 24px; }
    .footer-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 32px; }
    .footer-column ul { list-style: none; padding: 0; }
    .footer-brand { color: #34d399; }
    .footer-bottom { max-width: 1200px; margin: 32px auto 0; display: flex; justify-content: space-between; color: #6b7280; font-size: 0.875rem; }
    .admin-hint { position: fixed; bottom: 8px; right: 8px; font-size: 0.75rem; color: rgba(156, 163, 175, 0.4); pointer-events: none; }
    @media (max-width: 768px) {
        .burger-menu { display: flex; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open { display: flex; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0; padding: 16px 24px; background: rgba(0, 0, 0, 0.95); }
        .contact-grid, .footer-grid { grid-template-columns: 1fr; }
        .feature-row, .feature-row.reversed { flex-direction: column; }
    }
"#;
