use raylib::prelude::*;
use voxmesh_blocks::UvAtlas;

use crate::conv::color_to_rl;
use crate::error::RenderError;

/// Paints every tile's flat color into its region of a
/// `tile_size * tiles` by `tile_size` image and loads it as a point-filtered
/// texture.
pub fn build_atlas_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    atlas: &UvAtlas,
) -> Result<Texture2D, RenderError> {
    let (w, h) = atlas.image_size();
    let (w, h) = (w.max(1) as i32, h.max(1) as i32);
    let mut img = Image::gen_image_color(w, h, Color::BLANK);
    for tile in atlas.tiles() {
        let r = tile.region;
        let x0 = (r.x * w as f32).round() as i32;
        let y0 = (r.y * h as f32).round() as i32;
        let x1 = (r.width * w as f32).round() as i32;
        let y1 = (r.height * h as f32).round() as i32;
        img.draw_rectangle(x0, y0, x1 - x0, y1 - y0, color_to_rl(tile.color));
    }
    let tex = rl
        .load_texture_from_image(thread, &img)
        .map_err(|e| RenderError::Texture(e.to_string()))?;
    tex.set_texture_filter(thread, raylib::consts::TextureFilter::TEXTURE_FILTER_POINT);
    log::info!(
        target: "render",
        "atlas texture {}x{} with {} tiles",
        w,
        h,
        atlas.tiles().len()
    );
    Ok(tex)
}
