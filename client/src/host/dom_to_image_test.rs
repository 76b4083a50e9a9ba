use super::*;

fn request() -> RasterRequest {
    RasterRequest { width: 2000.0, height: 1500.0, scale: 2.5, background: "#111827".to_owned() }
}

#[test]
fn options_carry_output_size() {
    let options = raster_options(&request());
    assert_eq!(options["width"], 2000.0);
    assert_eq!(options["height"], 1500.0);
}

#[test]
fn options_scale_from_top_left() {
    let options = raster_options(&request());
    assert_eq!(options["style"]["transform"], "scale(2.5)");
    assert_eq!(options["style"]["transformOrigin"], "top left");
}

#[test]
fn options_paint_theme_background() {
    assert_eq!(raster_options(&request())["style"]["background"], "#111827");
}
