use plotstyle::plot::axes::{ArtistKind, TextRole, TickFormatter};
use plotstyle::plot::constants;
use plotstyle::plot::{set_title, style_plot, Axes, PlotOptions, ThousandsAxis, TitleOptions};
use plotstyle::style::font::NoFonts;
use plotstyle::style::theme::{BuiltinTheme, NoTheme};
use plotstyle::style::{apply_style, Outcome, StyleContext, StyleOptions};
use plotstyle::utils::table::Table;

use color_eyre::eyre::{Report, Result};
use std::fs::write;
use tempfile::TempDir;

#[test]
fn session_workflow() -> Result<(), Report> {
    // ------------------------------------------------------------------------
    // Style

    let mut ctx = StyleContext::new();
    let options = StyleOptions {
        install_font: false,
        ..Default::default()
    };
    let applied = apply_style(&mut ctx, &mut BuiltinTheme::new(), &mut NoFonts, &options)?;
    assert_eq!(applied.theme, Outcome::Applied);
    assert!(applied.fonts.is_empty());

    // ------------------------------------------------------------------------
    // Draw

    let tmp_dir = TempDir::new()?;
    let path = tmp_dir.path().join("revenue.tsv");
    let mut content = String::from("region\tquarter\trevenue\n");
    for region in 0..10 {
        for quarter in 1..=4 {
            content.push_str(&format!("region {region}\tQ{quarter}\t{}\n", region * 1000 + quarter));
        }
    }
    write(&path, content)?;
    let table = Table::from_tsv(&path)?;

    let mut ax = Axes::new();
    for i in 0..10 {
        let color = ctx.cycle_color(i).unwrap_or_default();
        ax.add_series(format!("region {i}"), color);
    }
    ax.add_collection(ArtistKind::Mesh, true);
    ax.set_xlabel("quarter");
    ax.set_ylabel("revenue  (usd)");

    // ------------------------------------------------------------------------
    // Annotate

    set_title(&ctx, &mut ax, "revenue by region", Some("all quarters"), &TitleOptions::default());
    let plot_options = PlotOptions {
        dataset: Some(&table),
        legend_column: Some("region".to_string()),
        format_thousands: Some(ThousandsAxis::Y),
        ..Default::default()
    };
    style_plot(&ctx, &mut ax, &plot_options);

    assert_eq!(ax.texts_with_role(TextRole::Title)[0].text, "Revenue By Region");
    assert_eq!(ax.texts_with_role(TextRole::Subtitle)[0].text, "All Quarters");
    assert_eq!(ax.xaxis.label, "Quarter");
    assert_eq!(ax.yaxis.label, "Revenue (Usd)");
    assert_eq!(ax.yaxis.formatter, TickFormatter::Thousands);
    assert_eq!(ax.yaxis.formatter.format(9004.0), "9,004");

    let legend = ax.legend.as_ref().map(|l| (l.entries.len(), l.ncol));
    assert_eq!(legend, Some((10, 6)));

    // the series colors wrap around the seven color palette
    assert_eq!(ax.series[7].color, constants::OKABE_ITO[0]);
    assert_eq!(
        ax.collections[0].cmap.as_deref(),
        Some(constants::OKABE_ITO_CMAP_NAME)
    );

    Ok(())
}

#[test]
fn contexts_are_independent() -> Result<(), Report> {
    let mut okabe = StyleContext::new();
    let mut kiwi = StyleContext::new();

    let options = StyleOptions {
        install_font: false,
        ..Default::default()
    };
    apply_style(&mut okabe, &mut NoTheme, &mut NoFonts, &options)?;

    let options = StyleOptions {
        palette: constants::KIWIISH.iter().map(|c| c.to_string()).collect(),
        ..options
    };
    apply_style(&mut kiwi, &mut NoTheme, &mut NoFonts, &options)?;

    let mut ax_okabe = Axes::new();
    ax_okabe.add_image();
    let mut ax_kiwi = ax_okabe.clone();

    style_plot(&okabe, &mut ax_okabe, &PlotOptions::default());
    style_plot(&kiwi, &mut ax_kiwi, &PlotOptions::default());

    assert_eq!(ax_okabe.images[0].cmap.as_deref(), Some(constants::OKABE_ITO_CMAP_NAME));
    assert_eq!(ax_kiwi.images[0].cmap.as_deref(), Some(constants::KIWIISH_CMAP_NAME));
    Ok(())
}

#[test]
fn settings_serialize_to_json() -> Result<(), Report> {
    let mut ctx = StyleContext::new();
    let options = StyleOptions {
        install_font: false,
        ..Default::default()
    };
    apply_style(&mut ctx, &mut NoTheme, &mut NoFonts, &options)?;

    let json: serde_json::Value = serde_json::from_str(&ctx.rc.to_json()?)?;
    assert_eq!(json["axes.titlelocation"], "left");
    assert_eq!(json["figure.figsize"], serde_json::json!([12.0, 8.0]));
    assert_eq!(json["axes.prop_cycle"][0], constants::OKABE_ITO[0]);
    assert_eq!(json["image.cmap"], constants::OKABE_ITO_CMAP_NAME);
    Ok(())
}
