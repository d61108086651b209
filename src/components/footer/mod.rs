//! Site footer: brand blurb, contact details and social links.

use leptos::prelude::*;
use leptos_icons::Icon;
use smflx_core::content::{Brand, FooterContent};

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer(brand: Brand, footer: FooterContent) -> impl IntoView {
    let FooterContent {
        blurb,
        headline_muted,
        headline,
        contact_heading,
        contact,
        socials,
        copyright,
    } = footer;
    let mail_href = format!("mailto:{}", contact.email);
    let phone_href = format!("tel:{}", contact.phone.replace(' ', ""));

    view! {
        <footer class=css::footer>
            <div class=css::container>
                <div class=css::grid>
                    <div class=css::brand>
                        <img class=css::logo src=brand.logo alt=format!("{} Logo", brand.name) />
                        <p class=css::blurb>{blurb}</p>
                    </div>

                    <div class=css::headline>
                        <h2 class=css::pitch>
                            <span class=css::muted>{headline_muted}</span>
                            <br />
                            {headline}
                        </h2>
                    </div>

                    <div class=css::contact>
                        <h4 class=css::contactHeading>{contact_heading}</h4>
                        <ul class=css::contactList>
                            <li class=css::contactItem>
                                <Icon icon=ic::LOCATION />
                                <span>{contact.address}</span>
                            </li>
                            <li class=css::contactItem>
                                <Icon icon=ic::MAIL />
                                <a class=css::contactLink href=mail_href>{contact.email}</a>
                            </li>
                            <li class=css::contactItem>
                                <Icon icon=ic::PHONE />
                                <a class=css::contactLink href=phone_href>{contact.phone}</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class=css::bottom>
                    <p class=css::copyright>{copyright}</p>
                    <div class=css::socials>
                        {socials
                            .into_iter()
                            .map(|network| {
                                view! {
                                    <a class=css::social href="#" aria-label=network.label()>
                                        <Icon icon=ic::social(network) />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
