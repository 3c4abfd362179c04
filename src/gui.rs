use crate::content::{CONTACTS, EXPERIENCE, HERO_ICONS, PROFILE, PROJECTS, SKILLS};
use crate::page::{PageState, Section};
use egui::{Align, Color32, Context, Layout, RichText, Stroke, Ui};
use egui_wgpu::Renderer;
use egui_winit::State;
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

// Tailwind sky palette
const SKY_100: Color32 = Color32::from_rgb(224, 242, 254);
const SKY_200: Color32 = Color32::from_rgb(186, 230, 253);
const SKY_300: Color32 = Color32::from_rgb(125, 211, 252);
const SKY_400: Color32 = Color32::from_rgb(56, 189, 248);
const SKY_500: Color32 = Color32::from_rgb(14, 165, 233);
const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);

// sky-950/30, sky-500/10, black/20
const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(2, 14, 22, 77);
const CARD_BORDER: Color32 = Color32::from_rgba_premultiplied(1, 17, 23, 26);
const NAV_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 51);

const CONTENT_WIDTH: f32 = 1100.0;
const PROGRESS_BAR_HEIGHT: f32 = 4.0;

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        let id = context.viewport_id();

        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.hyperlink_color = SKY_400;
        visuals.override_text_color = Some(Color32::WHITE);
        context.set_visuals(visuals);

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(
            device,
            output_color_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                ..Default::default()
            },
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        page: &mut PageState,
    ) {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            page_ui(ctx, page);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        // Drawn over the particle pass, so load instead of clear
        let mut render_pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();

        self.renderer
            .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        drop(render_pass);

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn page_ui(ctx: &Context, page: &mut PageState) {
    let nav = egui::TopBottomPanel::top("navigation")
        .frame(
            egui::Frame::new()
                .fill(NAV_FILL)
                .inner_margin(egui::Margin::symmetric(24, 16)),
        )
        .show_separator_line(false)
        .show(ctx, |ui| navigation(ui, page));

    egui::CentralPanel::default()
        .frame(egui::Frame::new())
        .show(ctx, |ui| {
            let viewport_height = ui.available_height();
            let output = egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_WIDTH);
                        hero(ui, page, viewport_height);
                        skills(ui, page, viewport_height);
                        experience(ui, page, viewport_height);
                        projects(ui, page, viewport_height);
                        contact(ui, page);
                    });
                });
            page.update_scroll(
                output.state.offset.y,
                output.content_size.y,
                output.inner_rect.height(),
            );
        });

    let top = nav.response.rect;
    let bar = egui::Rect::from_min_size(
        top.min,
        egui::vec2(top.width() * page.scroll_progress(), PROGRESS_BAR_HEIGHT),
    );
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("scroll_progress"),
    ))
    .rect_filled(bar, 0.0, SKY_500);
}

fn navigation(ui: &mut Ui, page: &mut PageState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(PROFILE.brand).size(20.0).strong().color(SKY_400));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // right-to-left: add in reverse so the order reads Home..Contact
            for section in Section::ALL.iter().rev() {
                let color = if page.active() == *section {
                    SKY_400
                } else {
                    SKY_100
                };
                let button =
                    egui::Button::new(RichText::new(section.label()).size(16.0).color(color))
                        .frame(false);
                if ui.add(button).clicked() {
                    page.navigate(*section);
                }
                ui.add_space(16.0);
            }
        });
    });
}

/// Zero-height marker at the top of a section, scrolled to on navigation.
fn anchor(ui: &mut Ui, page: &mut PageState, section: Section) {
    let (_, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 0.0), egui::Sense::hover());
    if page.take_scroll_request(section) {
        response.scroll_to_me(Some(Align::TOP));
    }
}

fn heading(ui: &mut Ui, text: &str) {
    ui.add_space(80.0);
    ui.label(RichText::new(text).size(36.0).strong());
    ui.add_space(48.0);
}

fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(CARD_FILL)
        .stroke(Stroke::new(1.0, CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(Layout::top_down(Align::Min), add_contents).inner
        })
        .inner
}

fn bullet(ui: &mut Ui, marker: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(marker).color(SKY_400));
        ui.label(text);
    });
}

fn hero(ui: &mut Ui, page: &mut PageState, min_height: f32) {
    anchor(ui, page, Section::Home);
    ui.allocate_ui(egui::vec2(ui.available_width(), min_height), |ui| {
        ui.set_min_height(min_height);
        ui.vertical_centered(|ui| {
            ui.add_space(min_height * 0.3);
            ui.label(RichText::new(PROFILE.name).size(64.0).strong().color(SKY_400));
            ui.add_space(24.0);
            ui.label(RichText::new(PROFILE.headline).size(24.0).color(SKY_200));
            ui.add_space(40.0);

            let chip_width = 64.0;
            let gap = 32.0;
            let row = HERO_ICONS.len() as f32 * (chip_width + gap) - gap;
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - row) / 2.0).max(0.0));
                ui.spacing_mut().item_spacing.x = gap;
                for icon in HERO_ICONS {
                    egui::Frame::new()
                        .fill(CARD_FILL)
                        .corner_radius(egui::CornerRadius::same(12))
                        .inner_margin(egui::Margin::same(16))
                        .show(ui, |ui| {
                            ui.label(RichText::new(*icon).size(32.0).color(BLUE_600));
                        });
                }
            });
        });
    });
}

fn skills(ui: &mut Ui, page: &mut PageState, min_height: f32) {
    anchor(ui, page, Section::Skills);
    ui.vertical_centered(|ui| {
        ui.set_min_height(min_height);
        heading(ui, "Skills & Expertise");
        ui.columns(SKILLS.len(), |columns| {
            for (column, category) in columns.iter_mut().zip(SKILLS) {
                card(column, |ui| {
                    ui.label(RichText::new(category.name).size(20.0).strong().color(SKY_400));
                    ui.add_space(16.0);
                    for skill in category.skills {
                        bullet(ui, "▪", skill);
                    }
                });
            }
        });
    });
}

fn experience(ui: &mut Ui, page: &mut PageState, min_height: f32) {
    anchor(ui, page, Section::Experience);
    ui.vertical_centered(|ui| {
        ui.set_min_height(min_height);
        heading(ui, "Experience");
        for role in EXPERIENCE {
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(role.company).size(20.0).strong().color(SKY_400));
                        ui.label(RichText::new(role.title).color(SKY_200));
                    });
                    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                        ui.label(RichText::new(role.period).color(SKY_300));
                    });
                });
                ui.add_space(16.0);
                for highlight in role.highlights {
                    bullet(ui, "▸", highlight);
                }
            });
            ui.add_space(32.0);
        }
    });
}

fn projects(ui: &mut Ui, page: &mut PageState, min_height: f32) {
    anchor(ui, page, Section::Projects);
    ui.vertical_centered(|ui| {
        ui.set_min_height(min_height);
        heading(ui, "Projects");
        ui.columns(PROJECTS.len(), |columns| {
            for (column, project) in columns.iter_mut().zip(PROJECTS) {
                card(column, |ui| {
                    ui.label(RichText::new(project.title).size(20.0).strong().color(SKY_400));
                    ui.add_space(16.0);
                    for point in project.points {
                        bullet(ui, "▪", point);
                    }
                });
            }
        });
    });
}

fn contact(ui: &mut Ui, page: &mut PageState) {
    anchor(ui, page, Section::Contact);
    ui.vertical_centered(|ui| {
        heading(ui, "Let's Connect");
        for link in CONTACTS {
            ui.hyperlink_to(
                RichText::new(format!("{}  {}", link.icon, link.label))
                    .size(22.0)
                    .color(SKY_400),
                link.url,
            );
            ui.add_space(16.0);
        }
        ui.add_space(80.0);
    });
}
