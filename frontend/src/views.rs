//! Zoon adapter: commits the shared `PageView` description to the DOM.

use shared::{CardView, FilterOptions, FilterState, GridView, SelectOption, SortMode, Thumbnail};
use zoon::*;

use crate::controller::GalleryController;

const CARD_WIDTH: u32 = 240;
const THUMB_HEIGHT: u32 = 160;
const SELECT_MIN_WIDTH: u32 = 180;

const INK: &str = "rgb(17, 17, 17)";
const INK_MUTED: &str = "rgba(17, 17, 17, 0.55)";
const INK_FAINT: &str = "rgba(17, 17, 17, 0.35)";
const LINE: &str = "rgba(17, 17, 17, 0.12)";
const SURFACE: &str = "rgb(255, 255, 255)";
const PAGE: &str = "rgb(247, 246, 243)";
const CHIP: &str = "rgba(17, 17, 17, 0.06)";
const HOVER: &str = "rgba(17, 17, 17, 0.04)";

pub fn page(controller: &GalleryController) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(24))
        .s(Gap::new().y(20))
        .s(Background::new().color(PAGE))
        .s(Font::new().color(INK).family([
            FontFamily::new("Inter"),
            FontFamily::new("Hiragino Sans"),
            FontFamily::new("system-ui"),
            FontFamily::SansSerif,
        ]))
        .item(header(controller))
        .item(filter_bar(controller))
        .item(results(controller))
}

fn header(controller: &GalleryController) -> impl Element + use<> {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(12))
        .s(Align::new().center_y())
        .item(
            El::new()
                .s(Font::new().size(24).weight(FontWeight::Bold))
                .child(Text::new(controller.config().labels.title.clone())),
        )
}

// ===== FILTER BAR =====

/// Selection controls. Each maps to exactly one filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Base,
    Tag,
    Role,
    Sort,
}

impl FilterField {
    pub fn options(self, options: &FilterOptions) -> Vec<SelectOption> {
        match self {
            FilterField::Base => options.bases.clone(),
            FilterField::Tag => options.tags.clone(),
            FilterField::Role => options.roles.clone(),
            FilterField::Sort => shared::sort_options(),
        }
    }

    pub fn selected(self, filter: &FilterState) -> String {
        match self {
            FilterField::Base => filter.base.clone(),
            FilterField::Tag => filter.tag.clone(),
            FilterField::Role => filter.role.clone(),
            FilterField::Sort => filter.sort.as_str().to_string(),
        }
    }

    fn send(self, controller: &GalleryController, value: String) {
        match self {
            FilterField::Base => controller.base_selected_relay.send(value),
            FilterField::Tag => controller.tag_selected_relay.send(value),
            FilterField::Role => controller.role_selected_relay.send(value),
            FilterField::Sort => match SortMode::from_value(&value) {
                Some(sort) => controller.sort_selected_relay.send(sort),
                None => zoon::eprintln!("[APP] unknown sort mode '{}'", value),
            },
        }
    }
}

/// Label of the option holding `value`; the value itself when no option matches.
pub fn selected_label(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| value.to_string())
}

fn filter_bar(controller: &GalleryController) -> impl Element + use<> {
    let display = &controller.config().display;
    Row::new()
        .multiline()
        .s(Width::fill())
        .s(Gap::new().x(12).y(12))
        .s(Align::new().center_y())
        .item(search_input(controller))
        .item(select_control(controller, FilterField::Base))
        .item(select_control(controller, FilterField::Tag))
        .items(
            display
                .show_role_filter
                .then(|| select_control(controller, FilterField::Role)),
        )
        .items(
            display
                .show_sort_control
                .then(|| select_control(controller, FilterField::Sort)),
        )
        .item(reset_button(controller))
}

fn search_input(controller: &GalleryController) -> impl Element + use<> {
    let query_changed_relay = controller.query_changed_relay.clone();
    TextInput::new()
        .s(Width::exact(280))
        .s(Padding::new().x(12).y(10))
        .s(Background::new().color(SURFACE))
        .s(RoundedCorners::all(8))
        .s(Borders::all(Border::new().width(1).color(LINE)))
        .s(Font::new().size(14).color(INK))
        .label_hidden("search")
        .placeholder(
            Placeholder::new(controller.config().labels.search_placeholder.clone())
                .s(Font::new().color(INK_FAINT)),
        )
        // Cleared on reset only; typing is not echoed back into the input.
        .text_signal(
            controller
                .reset_generation_signal()
                .dedupe()
                .map(|_| String::new()),
        )
        .on_change(move |text| query_changed_relay.send(text))
}

fn select_control(controller: &GalleryController, field: FilterField) -> impl Element + use<> {
    let is_open = Mutable::new(false);

    let label_signal = map_ref! {
        let options = controller.options_signal().map(move |options| field.options(&options)),
        let selected = controller.filter_signal().map(move |filter| field.selected(&filter)) =>
        selected_label(options, selected)
    };

    Row::new()
        .s(Width::default().min(SELECT_MIN_WIDTH))
        .s(Padding::new().x(12).y(10))
        .s(Gap::new().x(8))
        .s(Background::new().color(SURFACE))
        .s(RoundedCorners::all(8))
        .s(Borders::all(Border::new().width(1).color(LINE)))
        .s(Font::new().size(14))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Align::new().center_y())
        .item(El::new().s(Width::fill()).child(Text::with_signal(label_signal)))
        .item(El::new().s(Font::new().color(INK_FAINT)).child(Text::new("▾")))
        .on_click({
            let is_open = is_open.clone();
            move || is_open.set_neq(!is_open.get())
        })
        .element_below_signal(is_open.signal().map_true({
            let controller = controller.clone();
            let is_open = is_open.clone();
            move || select_dropdown(&controller, field, &is_open)
        }))
        .on_click_outside({
            let is_open = is_open.clone();
            move || is_open.set(false)
        })
}

fn select_dropdown(
    controller: &GalleryController,
    field: FilterField,
    is_open: &Mutable<bool>,
) -> impl Element + use<> {
    let controller = controller.clone();
    let is_open = is_open.clone();
    Column::new()
        .s(Width::fill())
        .s(Transform::new().move_down(4))
        .s(Background::new().color(SURFACE))
        .s(Borders::all(Border::new().width(1).color(LINE)))
        .s(RoundedCorners::all(8))
        .s(Shadows::new([Shadow::new().y(4).blur(12).color("rgba(17, 17, 17, 0.12)")]))
        .s(Height::default().max(320))
        .s(Scrollbars::y_and_clip_x())
        .items_signal_vec(
            controller
                .options_signal()
                .map(move |options| field.options(&options))
                .to_signal_vec()
                .map({
                    let controller = controller.clone();
                    move |option| select_item(&controller, field, option, &is_open)
                }),
        )
}

fn select_item(
    controller: &GalleryController,
    field: FilterField,
    option: SelectOption,
    is_open: &Mutable<bool>,
) -> impl Element + use<> {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    let controller = controller.clone();
    let is_open = is_open.clone();
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(12).y(8))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Font::new().size(14).color(option_color(&option)))
        .s(Background::new().color_signal(hovered_signal.map_bool(|| HOVER, || SURFACE)))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .child(Text::new(option.label.clone()))
        .on_click(move || {
            field.send(&controller, option.value.clone());
            is_open.set(false);
        })
}

/// The "no filter" entry reads as secondary text.
fn option_color(option: &SelectOption) -> &'static str {
    if option.is_any() { INK_MUTED } else { INK }
}

fn reset_button(controller: &GalleryController) -> impl Element + use<> {
    let reset_pressed_relay = controller.reset_pressed_relay.clone();
    Button::new()
        .s(Padding::new().x(16).y(10))
        .s(Background::new().color(INK))
        .s(RoundedCorners::all(8))
        .s(Font::new().size(14).color(SURFACE))
        .label(controller.config().labels.reset.clone())
        .on_press(move || reset_pressed_relay.send(()))
}

// ===== RESULTS =====

// Count and grid share one subscription so each change filters and sorts once.
fn results(controller: &GalleryController) -> impl Element + use<> {
    El::new()
        .s(Width::fill())
        .child_signal(controller.page_view_signal().map(|view| {
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(12))
                .item(
                    El::new()
                        .s(Font::new().size(14).color(INK_MUTED))
                        .child(Text::new(view.count)),
                )
                .item(grid_content(view.grid))
        }))
}

fn grid_content(grid: GridView) -> RawElOrText {
    match grid {
        GridView::Loading(text) => El::new()
            .s(Font::new().size(14).color(INK_MUTED))
            .child(Text::new(text))
            .unify(),
        GridView::Message(text) => El::new()
            .s(Padding::all(16))
            .s(Font::new().size(14).color(INK))
            .child(Paragraph::new().content(text))
            .unify(),
        GridView::Cards(cards) => Row::new()
            .multiline()
            .s(Width::fill())
            .s(Gap::new().x(16).y(16))
            .s(Align::new().top())
            .items(cards.into_iter().map(card))
            .unify(),
    }
}

fn card(card: CardView) -> impl Element + use<> {
    Link::new()
        .s(Width::exact(CARD_WIDTH))
        .s(Background::new().color(SURFACE))
        .s(RoundedCorners::all(12))
        .s(Borders::all(Border::new().width(1).color(LINE)))
        .s(Clip::both())
        .s(Font::new().color(INK))
        .to(card.href)
        .new_tab(NewTab::new())
        .update_raw_el(|raw_el| raw_el.style("text-decoration", "none"))
        .label(
            Column::new()
                .s(Width::fill())
                .item(thumbnail(card.thumbnail))
                .item(card_body(card.name, card.base, card.roles, card.tags)),
        )
}

fn thumbnail(thumbnail: Thumbnail) -> impl Element + use<> {
    let frame = El::new()
        .s(Width::fill())
        .s(Height::exact(THUMB_HEIGHT))
        .s(Background::new().color(CHIP))
        .s(Clip::both());
    match thumbnail {
        Thumbnail::Image { src, alt } => frame
            .child(
                Image::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .url(src)
                    .description(alt)
                    .update_raw_el(|raw_el| {
                        raw_el.attr("loading", "lazy").style("object-fit", "cover")
                    }),
            )
            .unify(),
        Thumbnail::Placeholder(text) => frame
            .child(
                El::new()
                    .s(Align::center())
                    .s(Font::new().size(12).color(INK_FAINT).family([
                        FontFamily::new("ui-monospace"),
                        FontFamily::new("SFMono-Regular"),
                        FontFamily::new("Menlo"),
                        FontFamily::Monospace,
                    ]))
                    .child(Text::new(text)),
            )
            .unify(),
    }
}

fn card_body(
    name: String,
    base: String,
    roles: Option<String>,
    tags: Vec<String>,
) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(12))
        .s(Gap::new().y(8))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(8))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Font::new().size(16).weight(FontWeight::Bold))
                        .child(Text::new(name)),
                )
                .item(
                    El::new()
                        .s(Font::new().size(12).color(INK_MUTED))
                        .child(Text::new(base)),
                ),
        )
        .items(roles.map(|roles| {
            Paragraph::new()
                .s(Font::new().size(12).color(INK_MUTED))
                .content(roles)
        }))
        .items((!tags.is_empty()).then(|| {
            Row::new()
                .multiline()
                .s(Gap::new().x(6).y(6))
                .items(tags.into_iter().map(tag_chip))
        }))
}

fn tag_chip(tag: String) -> impl Element + use<> {
    El::new()
        .s(Padding::new().x(8).y(2))
        .s(RoundedCorners::all_max())
        .s(Background::new().color(CHIP))
        .s(Font::new().size(11).color(INK_MUTED))
        .child(Text::new(tag))
}
