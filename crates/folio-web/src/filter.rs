//! Project gallery tag filter.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Card, FilterUpdate, TagFilter};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{DomResult, Page, listen, set_class, show};

const FILTER_BUTTON_CLASS: &str = "filter-btn";
const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";

struct Gallery {
    page: Page,
    cards: Vec<Element>,
    search: Option<HtmlInputElement>,
    no_results: Option<Element>,
    filter: RefCell<TagFilter>,
}

impl Gallery {
    fn render(&self, update: &FilterUpdate) {
        for (card, visible) in self.cards.iter().zip(&update.outcome.visible) {
            set_class(card, "hidden", !visible);
        }
        if let Some(no_results) = &self.no_results {
            show(no_results, update.outcome.show_no_results());
        }
        let filter = self.filter.borrow();
        for button in self.page.query_all(FILTER_BUTTON_SELECTOR) {
            let tag = button.get_attribute("data-tag");
            set_class(&button, "active", filter.is_button_active(tag.as_deref()));
        }
        if update.clear_search {
            if let Some(search) = &self.search {
                search.set_value("");
            }
        }
    }
}

/// Append one button per distinct tag to the filter bar.
fn create_buttons(page: &Page, bar: &Element, filter: &TagFilter) -> DomResult<()> {
    for button in filter.buttons() {
        let element = page.document.create_element("button")?;
        element.set_class_name(FILTER_BUTTON_CLASS);
        element.set_attribute("data-tag", &button.tag)?;
        element.set_text_content(Some(&button.label));
        bar.append_child(&element)?;
    }
    Ok(())
}

pub fn init(page: &Page) -> DomResult<()> {
    let Some(bar) = page.element("filter-bar") else {
        log::debug!("#filter-bar not found, skipping");
        return Ok(());
    };
    let card_elements = page.query_all(".project-card[data-tags]");
    if card_elements.is_empty() {
        log::debug!("No tagged project cards, skipping filter");
        return Ok(());
    }

    let cards = card_elements
        .iter()
        .map(|card| Card::from_data_tags(&card.get_attribute("data-tags").unwrap_or_default()))
        .collect();
    let filter = TagFilter::new(cards);
    create_buttons(page, &bar, &filter)?;
    log::info!(
        "Tag filter ready: {} cards, {} tags",
        card_elements.len(),
        filter.buttons().len()
    );

    let gallery = Rc::new(Gallery {
        page: page.clone(),
        cards: card_elements,
        search: page.element_as::<HtmlInputElement>("tag-search"),
        no_results: page.element("no-results").map(Element::from),
        filter: RefCell::new(filter),
    });

    {
        let gallery = gallery.clone();
        listen(&bar, "click", move |event| {
            let button = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|t| t.closest(FILTER_BUTTON_SELECTOR).ok().flatten());
            let Some(tag) = button.and_then(|b| b.get_attribute("data-tag")) else {
                return;
            };
            let search = gallery
                .search
                .as_ref()
                .map(|input| input.value())
                .unwrap_or_default();
            let update = gallery.filter.borrow_mut().select_filter(&tag, &search);
            gallery.render(&update);
        })?;
    }

    for badge in page.query_all(".tag[data-tag]") {
        let gallery = gallery.clone();
        let target = badge.clone();
        listen(&target, "click", move |_| {
            let Some(tag) = badge.get_attribute("data-tag") else {
                return;
            };
            let update = gallery.filter.borrow_mut().select_badge(&tag);
            gallery.render(&update);
        })?;
    }

    if let Some(search) = gallery.search.clone() {
        let gallery = gallery.clone();
        let input = search.clone();
        listen(&search, "input", move |_| {
            let update = gallery.filter.borrow_mut().set_search(&input.value());
            gallery.render(&update);
        })?;
    }
    Ok(())
}
