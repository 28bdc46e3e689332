use crate::config;
use crate::events::AppEvent;
use crate::gui::circle::{self, Point, State};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    /// Frame clock timestamp in microseconds.
    Frame(i64),
    Resize(i32, i32),
    CursorMove(Point),
    CursorLeave,
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
            AppEvent::Quit => AppMsg::Quit,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (State, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("The Gnostic Circle"),
            set_default_size: (900, 900),
            add_css_class: "gnostic-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape || key == gtk::gdk::Key::q {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "gnostic-drawing-area",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::CursorMove(Point::new(x, y)));
                    },
                    connect_leave[sender] => move |_| {
                        sender.input(AppMsg::CursorLeave);
                    }
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root, state.config.window.layer);

        let state = Rc::new(RefCell::new(state));

        let model = AppModel {
            state: state.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let state = state_draw.borrow();
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context, state.config.window.opacity);
                if let Err(e) = circle::draw(cr, &state, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_tick = sender.clone();
        widgets.drawing_area.add_tick_callback(move |_, clock| {
            sender_tick.input(AppMsg::Frame(clock.frame_time()));
            glib::ControlFlow::Continue
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let redraw = match msg {
            AppMsg::Frame(frame_time) => self.state.borrow_mut().advance(frame_time),
            AppMsg::Resize(width, height) => self
                .state
                .borrow_mut()
                .resize(width as f64, height as f64),
            AppMsg::CursorMove(point) => self.state.borrow_mut().update_pointer(point),
            AppMsg::CursorLeave => self.state.borrow_mut().clear_pointer(),
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    if new_config.window.layer != self.state.borrow().config.window.layer {
                        log::warn!("Layer changes take effect after a restart");
                    }
                    self.state.borrow_mut().reload(new_config);
                    log::info!("Configuration reloaded");
                    true
                }
                Err(e) => {
                    log::error!("Failed to reload config: {}", e);
                    false
                }
            },
            AppMsg::Quit => {
                relm4::main_application().quit();
                false
            }
        };
        if redraw {
            self.drawing_area.queue_draw();
        }
    }
}
