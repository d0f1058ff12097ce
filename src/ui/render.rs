use ratatui::Frame;

use crate::app::App;
use crate::logic::navigation::navbar_scrolled;
use crate::overlay::OverlayContent;
use crate::scheduler::Clock;

use super::{layout, legend, menu, navbar, page, splash, status_bar, toast};

/// Main render function - orchestrates all UI rendering
///
/// Page first, then chrome, then whatever the overlay surface holds, so
/// overlays always sit on top.
pub fn render<C: Clock + Clone>(f: &mut Frame, app: &App<C>) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);
    let now = app.now();
    let scroll = app.scroll_position();
    let active = app.active_section();

    page::render_page(f, layout_info.page_area, app);

    navbar::render_navbar(
        f,
        layout_info.navbar_area,
        &navbar::NavbarState {
            name: &app.content.name,
            active,
            scrolled: navbar_scrolled(scroll),
            narrow: app.model.ui.is_narrow(),
            menu_open: app.model.ui.menu_open(),
            clock: &app.model.page.clock,
        },
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.vim_mode,
        app.model.input_mode(),
        app.model.ui.is_narrow(),
    );

    let form_status = if app.model.form.submitting {
        Some(app.model.form.button_label())
    } else if app.model.ui.form_focused() {
        Some("editing")
    } else {
        None
    };
    let status_line =
        status_bar::build_status_line(active, scroll, app.max_scroll(), form_status);
    status_bar::render_status_bar(f, layout_info.status_area, &status_line);

    if app.model.ui.menu_open() {
        menu::render_menu(f, size, app.model.ui.menu_selection);
    }

    for view in app.overlays.surface().overlays() {
        match &view.content {
            OverlayContent::Toast { message, severity } => {
                toast::render_toast(f, size, message, *severity, view.style.slide.value_at(now));
            }
            OverlayContent::Splash { title } => {
                splash::render_splash(
                    f,
                    size,
                    title,
                    view.style.opacity.value_at(now),
                    view.style.progress.value_at(now),
                );
            }
        }
    }
}
