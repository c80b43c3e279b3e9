use crate::constants::*;
use crate::core::ParticleField;
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D painter for the particle field.
pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn draw(&self, field: &ParticleField) {
        self.fade_previous_frame();
        self.draw_connections(field);
        self.draw_pointer_links(field);
        self.draw_particles(field);
    }

    // Low-alpha fill instead of a clear leaves motion trails behind.
    fn fade_previous_frame(&self) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(TRAIL_FILL);
        ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn draw_connections(&self, field: &ParticleField) {
        let ctx = &self.ctx;
        ctx.save();
        field.for_each_connection(|c| {
            ctx.set_stroke_style_str(if c.enhanced {
                POINTER_STROKE
            } else {
                CONNECTION_STROKE
            });
            ctx.set_global_alpha(c.alpha as f64);
            ctx.set_line_width(c.width as f64);
            ctx.begin_path();
            ctx.move_to(c.a.x as f64, c.a.y as f64);
            ctx.line_to(c.b.x as f64, c.b.y as f64);
            ctx.stroke();
        });
        ctx.restore();
    }

    fn draw_pointer_links(&self, field: &ParticleField) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_stroke_style_str(POINTER_STROKE);
        ctx.set_line_width(1.0);
        field.for_each_pointer_link(|l| {
            ctx.set_global_alpha(l.alpha as f64);
            ctx.begin_path();
            ctx.move_to(l.from.x as f64, l.from.y as f64);
            ctx.line_to(l.to.x as f64, l.to.y as f64);
            ctx.stroke();
        });
        ctx.restore();
    }

    fn draw_particles(&self, field: &ParticleField) {
        let ctx = &self.ctx;
        let glow = field.config().glow;
        for p in field.particles() {
            ctx.save();
            ctx.set_global_alpha(p.opacity as f64);
            if glow {
                ctx.set_shadow_blur(GLOW_BLUR);
                ctx.set_shadow_color(p.color);
            }
            ctx.set_fill_style_str(p.color);
            ctx.begin_path();
            _ = ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.radius as f64,
                0.0,
                TAU,
            );
            ctx.fill();
            ctx.restore();
        }
    }
}
