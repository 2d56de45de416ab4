use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::pages::site_content::NavLink;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub links: Vec<NavLink>,
}

#[function_component]
pub fn Navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let open_submenu = use_state(|| None::<usize>);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 50.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let open_submenu = open_submenu.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            open_submenu.set(None);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">{"SINAD"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for props.links.iter().enumerate().map(|(index, link)| {
                            if link.submenu.is_empty() {
                                html! {
                                    <a href={link.href.clone()} class="nav-link" onclick={close_menu.clone()}>
                                        {&link.name}
                                    </a>
                                }
                            } else {
                                let toggle_submenu = {
                                    let open_submenu = open_submenu.clone();
                                    Callback::from(move |e: MouseEvent| {
                                        e.prevent_default();
                                        let next = (*open_submenu != Some(index)).then_some(index);
                                        open_submenu.set(next);
                                    })
                                };
                                html! {
                                    <div class="nav-dropdown">
                                        <a href={link.href.clone()} class="nav-link" onclick={toggle_submenu}>
                                            {&link.name}{" ▾"}
                                        </a>
                                        if *open_submenu == Some(index) {
                                            <div class="nav-submenu">
                                                {
                                                    for link.submenu.iter().map(|item| html! {
                                                        <a href={item.href.clone()} class="nav-submenu-link" onclick={close_menu.clone()}>
                                                            {&item.name}
                                                        </a>
                                                    })
                                                }
                                            </div>
                                        }
                                    </div>
                                }
                            }
                        })
                    }
                </div>
            </div>
        </nav>
    }
}
