use crate::plot::color::Rgba;
use crate::plot::colormap::{sorted_hex, Colormap, KIWIISH_CMAP, OKABE_ITO_CMAP};
use crate::plot::constants;
use color_eyre::eyre::{Report, Result};

#[test]
fn hex_parsing() -> Result<(), Report> {
    assert_eq!(Rgba::from_hex("#0072B2")?.to_hex(), "#0072B2");
    assert_eq!(Rgba::from_hex("#0072b2")?.to_hex(), "#0072B2");
    assert_eq!(Rgba::from_hex("#abc")?.to_hex(), "#AABBCC");
    assert_eq!(Rgba::from_hex("#abcf")?.to_hex(), "#AABBCC");
    assert_eq!(Rgba::from_hex("#0f08")?.to_hex(), "#00FF0088");
    assert_eq!(Rgba::from_hex("#00000080")?.to_hex(), "#00000080");
    assert_eq!(Rgba::from_hex("#FFFFFF")?, Rgba::new(1.0, 1.0, 1.0, 1.0));

    assert!(Rgba::from_hex("0072B2").is_err());
    assert!(Rgba::from_hex("#12345").is_err());
    assert!(Rgba::from_hex("#GGGGGG").is_err());
    assert!(Rgba::from_hex("#ÄÄÄ").is_err());
    Ok(())
}

#[test]
fn sorted_hex_ignores_case() {
    let sorted = sorted_hex(&["#abcdef", "#ABC000", "#0000FF"]);
    assert_eq!(sorted, vec!["#0000FF", "#ABC000", "#abcdef"]);
}

#[test]
fn permutations_give_same_colormap() -> Result<(), Report> {
    let forward = constants::OKABE_ITO.to_vec();
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(3);

    let expected = Colormap::from_list("perm", &sorted_hex(&forward), 256)?;
    assert_eq!(Colormap::from_list("perm", &sorted_hex(&reversed), 256)?, expected);
    assert_eq!(Colormap::from_list("perm", &sorted_hex(&rotated), 256)?, expected);
    Ok(())
}

#[test]
fn two_color_colormap() -> Result<(), Report> {
    let colors = ["#0072B2", "#E69F00"];
    assert_eq!(sorted_hex(&colors), colors.to_vec());

    let cmap = Colormap::from_list("two", &sorted_hex(&colors), constants::CMAP_RESOLUTION)?;
    assert_eq!(cmap.name(), "two");
    assert_eq!(cmap.n(), 256);
    assert_eq!(cmap.lut()[0].to_hex(), "#0072B2");
    assert_eq!(cmap.lut()[255].to_hex(), "#E69F00");
    assert_eq!(cmap.sample(0.0).to_hex(), "#0072B2");
    assert_eq!(cmap.sample(1.0).to_hex(), "#E69F00");

    // out of range values are clamped
    assert_eq!(cmap.sample(-3.0), cmap.sample(0.0));
    assert_eq!(cmap.sample(7.0), cmap.sample(1.0));
    Ok(())
}

#[test]
fn interpolation_is_linear_between_nodes() -> Result<(), Report> {
    let cmap = Colormap::from_list("bw", &["#000000", "#FFFFFF"], 3)?;
    assert_eq!(cmap.lut()[1], Rgba::new(0.5, 0.5, 0.5, 1.0));

    let cmap = Colormap::from_list("rgb", &["#FF0000", "#00FF00", "#0000FF"], 5)?;
    let hex = cmap.lut().iter().map(|c| c.to_hex()).collect::<Vec<_>>();
    assert_eq!(hex, vec!["#FF0000", "#808000", "#00FF00", "#008080", "#0000FF"]);
    Ok(())
}

#[test]
fn single_color_is_constant() -> Result<(), Report> {
    let cmap = Colormap::from_list("one", &["#56B4E9"], 256)?;
    assert!(cmap.lut().iter().all(|c| c.to_hex() == "#56B4E9"));
    Ok(())
}

#[test]
fn malformed_colors_fail() {
    assert!(Colormap::from_list::<&str>("empty", &[], 256).is_err());
    assert!(Colormap::from_list("bad", &["#0072B2", "blue"], 256).is_err());
    assert!(Colormap::from_list("zero", &["#0072B2"], 0).is_err());
}

#[test]
fn samples_span_the_map() -> Result<(), Report> {
    let cmap = Colormap::from_list("bw", &["#000000", "#FFFFFF"], 256)?;
    let samples = cmap.samples(3);
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0].to_hex(), "#000000");
    assert_eq!(samples[2].to_hex(), "#FFFFFF");
    assert!(cmap.samples(0).is_empty());
    Ok(())
}

#[test]
fn builtin_colormaps_use_sorted_palettes() -> Result<(), Report> {
    assert_eq!(OKABE_ITO_CMAP.name(), constants::OKABE_ITO_CMAP_NAME);
    assert_eq!(KIWIISH_CMAP.name(), constants::KIWIISH_CMAP_NAME);
    assert_eq!(OKABE_ITO_CMAP.n(), constants::CMAP_RESOLUTION);

    let first = OKABE_ITO_CMAP.nodes()[0];
    let last = OKABE_ITO_CMAP.nodes()[6];
    assert_eq!(first, Rgba::from_hex("#0072B2")?);
    assert_eq!(last, Rgba::from_hex("#F0E442")?);

    // kiwi green is not first in the palette, but sorts after the blues
    assert_eq!(KIWIISH_CMAP.nodes()[0], Rgba::from_hex("#0072B2")?);
    Ok(())
}
