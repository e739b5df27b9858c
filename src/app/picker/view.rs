//! User Picker Renderer
//!
//! Draws the picker: either the search input with its dropdown of matches,
//! or the committed-selection chip with a clear button. A pointer press
//! outside the widget's rects closes the dropdown without touching the query
//! or the selection.

use egui::{Align2, FontId, RichText, Sense, Stroke, Vec2};

use crate::app::picker::state::{SelectionChange, UserPickerState};
use crate::app::theme::{styles, Palette};
use crate::shared::user::User;

/// Presentation options. None of these affect the widget's logic.
#[derive(Debug, Clone)]
pub struct UserPickerOptions {
    /// Label above the field; `None` hides the label row
    pub label: Option<String>,
    /// Hint text shown in the empty search field
    pub placeholder: String,
    /// When false, the label carries an "(Optional)" hint
    pub required: bool,
    /// Salt for egui ids, so several pickers can coexist
    pub id_salt: String,
}

impl Default for UserPickerOptions {
    fn default() -> Self {
        Self {
            label: Some("Assign To".to_string()),
            placeholder: "Start typing to search users...".to_string(),
            required: false,
            id_salt: String::new(),
        }
    }
}

/// What happened to the picker this frame
#[derive(Debug, Default)]
pub struct UserPickerResponse {
    /// Selection notification to forward to the consumer, if any
    pub change: Option<SelectionChange>,
}

/// Render the picker.
///
/// Polls the pending directory load, draws the input or the committed chip,
/// and handles dropdown visibility including outside-press dismissal.
pub fn render(
    ui: &mut egui::Ui,
    state: &mut UserPickerState,
    options: &UserPickerOptions,
    palette: &Palette,
) -> UserPickerResponse {
    state.poll_pending_load();

    let mut response = UserPickerResponse::default();
    let widget_id = ui.id().with(("user_picker", &options.id_salt));

    if let Some(ref label) = options.label {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).strong().color(palette.text_primary));
            if !options.required {
                ui.label(
                    RichText::new("(Optional)")
                        .small()
                        .color(palette.text_secondary),
                );
            }
        });
        ui.add_space(4.0);
    }

    let anchor_rect = if let Some(user) = state.selected_user().cloned() {
        render_selected_chip(ui, state, &user, palette, &mut response)
    } else {
        render_search_input(ui, state, options, palette, &mut response)
    };

    let dropdown_rect = if state.dropdown_open() {
        Some(render_dropdown(
            ui,
            state,
            palette,
            widget_id,
            anchor_rect,
            &mut response,
        ))
    } else {
        None
    };

    // Outside-press dismissal: a press that lands neither on the input row
    // nor on the dropdown hides the list, leaving query and selection alone.
    if let Some(dropdown_rect) = dropdown_rect {
        let outside_press = ui.input(|i| {
            i.pointer.any_pressed()
                && i.pointer
                    .interact_pos()
                    .is_some_and(|pos| !anchor_rect.contains(pos) && !dropdown_rect.contains(pos))
        });
        if outside_press {
            state.dismiss();
        }
    }

    response
}

/// The chip shown while a user is committed. Returns its rect.
fn render_selected_chip(
    ui: &mut egui::Ui,
    state: &mut UserPickerState,
    user: &User,
    palette: &Palette,
    response: &mut UserPickerResponse,
) -> egui::Rect {
    let mut clear_clicked = false;

    let frame_response = styles::chip_frame(palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            render_avatar(ui, user, palette, 14.0);
            ui.add_space(6.0);

            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&user.name)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.label(
                    RichText::new(&user.email)
                        .small()
                        .color(palette.text_secondary),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("✕").color(palette.text_secondary))
                    .clicked()
                {
                    clear_clicked = true;
                }
            });
        });
    });

    if clear_clicked {
        response.change = state.clear_selection();
    }

    frame_response.response.rect
}

/// The search input row. Returns its rect.
fn render_search_input(
    ui: &mut egui::Ui,
    state: &mut UserPickerState,
    options: &UserPickerOptions,
    palette: &Palette,
    response: &mut UserPickerResponse,
) -> egui::Rect {
    let mut text = state.query().to_string();

    let frame_response = styles::input_frame(palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("🔍").color(palette.text_secondary));

            let edit_response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text(options.placeholder.as_str())
                    .frame(false)
                    .text_color(palette.text_primary)
                    .desired_width(ui.available_width() - 8.0),
            );

            if edit_response.changed() {
                // Editing also drops a prior commitment, which emits the
                // cleared notification.
                response.change = state.set_query(text.clone());
            }
            if edit_response.gained_focus() {
                state.reopen();
            }
        });
    });

    frame_response.response.rect
}

/// The dropdown of matches, anchored below the input. Returns its rect.
fn render_dropdown(
    ui: &mut egui::Ui,
    state: &mut UserPickerState,
    palette: &Palette,
    widget_id: egui::Id,
    anchor_rect: egui::Rect,
    response: &mut UserPickerResponse,
) -> egui::Rect {
    // Collect first so the rows can borrow freely while we mutate state on a
    // click afterwards.
    let matches: Vec<User> = state.filtered_users().cloned().collect();
    let mut picked: Option<User> = None;

    let area_response = egui::Area::new(widget_id.with("dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor_rect.left_bottom() + Vec2::new(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            styles::dropdown_frame(palette).show(ui, |ui| {
                ui.set_min_width(anchor_rect.width() - 8.0);
                ui.set_max_width(anchor_rect.width() - 8.0);

                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        for user in &matches {
                            if render_match_row(ui, user, palette) {
                                picked = Some(user.clone());
                            }
                        }
                    });
            });
        });

    if let Some(user) = picked {
        if let Some(change) = state.commit(user) {
            response.change = Some(change);
        }
    }

    area_response.response.rect
}

/// Render a single dropdown row. Returns true if the row was clicked.
fn render_match_row(ui: &mut egui::Ui, user: &User, palette: &Palette) -> bool {
    let frame_response = egui::Frame::new()
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                render_avatar(ui, user, palette, 16.0);
                ui.add_space(6.0);

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(&user.name)
                                .strong()
                                .color(palette.text_primary),
                        );
                        if let Some(ref short_name) = user.short_name {
                            ui.label(
                                RichText::new(format!("({})", short_name))
                                    .small()
                                    .color(palette.text_secondary),
                            );
                        }
                    });
                    ui.label(
                        RichText::new(&user.email)
                            .small()
                            .color(palette.text_secondary),
                    );
                    render_role_badge(ui, user, palette);
                });
            });
        });

    let row_response = frame_response.response.interact(Sense::click());
    if row_response.hovered() {
        ui.painter().rect_filled(
            row_response.rect,
            egui::CornerRadius::same(6),
            palette.row_hover.gamma_multiply(0.5),
        );
    }
    row_response.clicked()
}

/// Round avatar bubble with the user's initial
fn render_avatar(ui: &mut egui::Ui, user: &User, palette: &Palette, radius: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(radius * 2.0), Sense::hover());
    ui.painter()
        .circle(rect.center(), radius, palette.avatar_bg, Stroke::NONE);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        user.avatar_initial(),
        FontId::proportional(radius),
        palette.avatar_fg,
    );
}

/// Small role tag under a dropdown row
fn render_role_badge(ui: &mut egui::Ui, user: &User, palette: &Palette) {
    let (badge_bg, badge_fg) = palette.role_badge(user.role);
    egui::Frame::new()
        .fill(badge_bg)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(user.role.label()).small().color(badge_fg));
        });
}
