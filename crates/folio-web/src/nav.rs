//! Mobile navigation menu.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{MobileNav, NavIcons};
use web_sys::HtmlElement;

use crate::dom::{DomResult, Page, listen, set_class, set_display};

struct NavElements {
    menu: HtmlElement,
    icon_menu: Option<HtmlElement>,
    icon_close: Option<HtmlElement>,
}

impl NavElements {
    fn render(&self, open: bool, icons: NavIcons) {
        set_class(&self.menu, MobileNav::OPEN_CLASS, open);
        if let Some(icon) = &self.icon_menu {
            set_display(icon, NavIcons::display(icons.menu_visible));
        }
        if let Some(icon) = &self.icon_close {
            set_display(icon, NavIcons::display(icons.close_visible));
        }
    }
}

pub fn init(page: &Page) -> DomResult<()> {
    let (Some(button), Some(menu)) = (page.element("mobile-btn"), page.element("mobile-menu"))
    else {
        log::debug!("Mobile menu not present");
        return Ok(());
    };
    let elements = Rc::new(NavElements {
        menu,
        icon_menu: page.element("icon-menu"),
        icon_close: page.element("icon-close"),
    });
    let nav = Rc::new(RefCell::new(MobileNav::new()));

    {
        let elements = elements.clone();
        let nav = nav.clone();
        listen(&button, "click", move |_| {
            let mut nav = nav.borrow_mut();
            nav.sync(elements.menu.class_list().contains(MobileNav::OPEN_CLASS));
            let icons = nav.toggle();
            elements.render(nav.is_open(), icons);
        })?;
    }

    for link in page.query_all(".mobile-link") {
        let elements = elements.clone();
        let nav = nav.clone();
        listen(&link, "click", move |_| {
            let icons = nav.borrow_mut().close();
            elements.render(false, icons);
        })?;
    }
    Ok(())
}
