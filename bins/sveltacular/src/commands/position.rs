//! `sveltacular position`

use crate::output::{self, Status};
use crate::Format;
use sveltacular_core::config::PositionConfig;
use sveltacular_core::{Error, Result as CoreResult, ResultExt};
use sveltacular_position::{calculate_arrow_position, calculate_position, PositionUpdate, Rect};
use tracing::debug;

/// Arguments for the position command.
pub struct PositionArgs {
    pub reference: String,
    pub floating: String,
    pub viewport: Option<String>,
    pub placement: Option<String>,
    pub offset: Option<f64>,
    pub padding: Option<f64>,
    pub no_flip: bool,
    pub no_align: bool,
    pub arrow: bool,
}

pub fn run(args: &PositionArgs, defaults: &PositionConfig, format: Format) -> anyhow::Result<bool> {
    let mut config = defaults.clone();
    if let Some(placement) = &args.placement {
        config.placement = placement.clone();
    }
    if let Some(offset) = args.offset {
        config.offset = offset;
    }
    if let Some(padding) = args.padding {
        config.viewport_padding = padding;
    }
    config.auto_flip &= !args.no_flip;
    config.auto_align &= !args.no_align;
    config.arrow |= args.arrow;

    let options = config.to_options()?;
    let reference = parse_rect(&args.reference).context("Parsing --reference")?;
    let [width, height] = parse_numbers::<2>(&args.floating).context("Parsing --floating")?;
    let floating = Rect::new(0.0, 0.0, width, height);
    let viewport = match &args.viewport {
        Some(v) => {
            let [w, h] = parse_numbers::<2>(v).context("Parsing --viewport")?;
            Rect::viewport(w, h)
        }
        None => config.viewport(),
    };

    debug!(?reference, ?floating, ?viewport, placement = %options.placement, "positioning");

    let position = calculate_position(&reference, &floating, &viewport, &options);
    let arrow = options.arrow.then(|| {
        let placed = floating.moved_to(position.left, position.top);
        calculate_arrow_position(&reference, &placed, position.side, options.arrow_size)
    });
    let update = PositionUpdate { position, arrow };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&update)?),
        Format::Text => {
            let resolved = position.placement();
            if resolved == options.placement {
                Status::success(&format!("Placed at {}", resolved));
            } else {
                Status::warning(&format!("Placed at {} (preferred {} did not fit)", resolved, options.placement));
            }
            println!("top:  {}", output::format_px(position.top));
            println!("left: {}", output::format_px(position.left));
            if let Some(arrow) = arrow {
                let offset = arrow.left.or(arrow.top).unwrap_or_default();
                println!("arrow: {} edge, {} in", arrow.side, output::format_px(offset));
            }
        }
    }

    Ok(true)
}

/// Parse `LEFT,TOP,WIDTH,HEIGHT`.
fn parse_rect(s: &str) -> CoreResult<Rect> {
    let [left, top, width, height] = parse_numbers::<4>(s)?;
    Ok(Rect::new(left, top, width, height))
}

/// Parse exactly `N` comma-separated finite numbers.
fn parse_numbers<const N: usize>(s: &str) -> CoreResult<[f64; N]> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| Error::invalid_geometry(format!("'{}' is not a number", part.trim())))
        })
        .collect::<CoreResult<Vec<f64>>>()?;

    let found = values.len();
    values
        .try_into()
        .map_err(|_| Error::invalid_geometry(format!("expected {} numbers in '{}', found {}", N, s, found)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sveltacular_core::ErrorCode;

    #[test]
    fn test_parse_rect() {
        assert_eq!(parse_rect("10, 20,30,40").unwrap(), Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(parse_rect("-5,0,1,1").unwrap().left, -5.0);
    }

    #[test]
    fn test_parse_wrong_count() {
        let err = parse_numbers::<2>("1,2,3").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidGeometry);
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(parse_numbers::<2>("1,abc").is_err());
        assert!(parse_numbers::<2>("1,inf").is_err());
    }
}
