use heart_core::{heart_outline, ClickHeart, Simulation};
use web_sys as web;

/// Paints simulation state onto a 2D canvas context in CSS pixel space.
pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
    // particle fill styles, formatted once; indices match `Simulation::particles`
    particle_styles: Vec<String>,
}

impl Painter {
    pub fn new(ctx: web::CanvasRenderingContext2d, sim: &Simulation) -> Self {
        let particle_styles = sim.particles().iter().map(|p| p.color.to_string()).collect();
        Self {
            ctx,
            particle_styles,
        }
    }

    pub fn paint(&self, sim: &Simulation) {
        let vp = sim.viewport();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, vp.width as f64, vp.height as f64);
        _ = ctx.set_global_composite_operation("lighter");

        for (p, style) in sim.particles().iter().zip(&self.particle_styles) {
            ctx.set_fill_style_str(style);
            for t in &p.trail {
                ctx.fill_rect(t.x as f64, t.y as f64, 1.0, 1.0);
            }
        }

        for h in sim.sprites() {
            self.paint_click_heart(h);
        }
    }

    fn paint_click_heart(&self, h: &ClickHeart) {
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.translate(h.position.x as f64, h.position.y as f64);
        _ = ctx.rotate(h.rotation as f64);
        ctx.set_global_alpha(h.alpha() as f64);
        ctx.set_fill_style_str(&h.fill().to_string());

        let outline = heart_outline(h.size);
        ctx.begin_path();
        ctx.move_to(outline.start.x as f64, outline.start.y as f64);
        for c in &outline.curves {
            ctx.bezier_curve_to(
                c.c1.x as f64,
                c.c1.y as f64,
                c.c2.x as f64,
                c.c2.y as f64,
                c.to.x as f64,
                c.to.y as f64,
            );
        }
        ctx.fill();
        ctx.restore();
    }
}
