use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::content::FOOTER_LINK_GROUPS;

const FOOTER_CSS: &str = r#"
    .footer {
        padding: 4rem 1rem 2rem;
        border-top: 1px solid var(--border);
        background: var(--muted);
    }
    .footer-grid {
        max-width: 1200px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr 2fr;
        gap: 2rem;
    }
    .footer h4 { margin: 0 0 1rem; }
    .footer ul { list-style: none; padding: 0; margin: 0; }
    .footer li { margin-bottom: 0.5rem; }
    .footer a { color: inherit; opacity: 0.75; text-decoration: none; }
    .footer a:hover { opacity: 1; color: var(--primary); }
    .footer-social { display: flex; gap: 1rem; margin-top: 1rem; }
    .newsletter { display: flex; gap: 0.5rem; margin-top: 0.75rem; }
    .newsletter input {
        flex: 1;
        font: inherit;
        padding: 0.5rem 0.75rem;
        border-radius: 0.375rem;
        border: 1px solid var(--border);
        background: var(--background);
        color: inherit;
    }
    .footer-bottom {
        max-width: 1200px;
        margin: 3rem auto 0;
        padding-top: 1.5rem;
        border-top: 1px solid var(--border);
        text-align: center;
        font-size: 0.875rem;
        opacity: 0.7;
    }
    @media (max-width: 768px) {
        .footer-grid { grid-template-columns: 1fr 1fr; }
    }
"#;

pub fn copyright_notice(year: i32) -> String {
    format!("\u{a9} {} SoftSell. All rights reserved.", year)
}

#[function_component]
pub fn Footer() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <footer class="footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-grid">
                <div>
                    <a href="#" class="nav-logo">
                        <i class="fas fa-hand-holding-dollar"></i>
                        <span>{"SoftSell"}</span>
                    </a>
                    <p>{"Helping businesses recover value from unused software licenses since 2020."}</p>
                    <div class="footer-social">
                        <a href="#" aria-label="Twitter"><i class="fab fa-twitter"></i></a>
                        <a href="#" aria-label="LinkedIn"><i class="fab fa-linkedin"></i></a>
                        <a href="#" aria-label="GitHub"><i class="fab fa-github"></i></a>
                    </div>
                </div>
                { for FOOTER_LINK_GROUPS.iter().map(|(title, links)| html! {
                    <div>
                        <h4>{*title}</h4>
                        <ul>
                            { for links.iter().map(|link| html! {
                                <li><a href={link.href}>{link.name}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
                <div>
                    <h4>{"Newsletter"}</h4>
                    <p>{"Subscribe to get the latest news and updates."}</p>
                    <form class="newsletter" onsubmit={onsubmit}>
                        <input type="email" placeholder="Your email" aria-label="Email address" />
                        <button type="submit" class="cta-button">{"Subscribe"}</button>
                    </form>
                </div>
            </div>
            <div class="footer-bottom">
                { copyright_notice(Utc::now().year()) }
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_notice_includes_year() {
        assert_eq!(copyright_notice(2026), "\u{a9} 2026 SoftSell. All rights reserved.");
    }
}
