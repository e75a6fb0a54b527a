use stockdash_core::stats::{fmt_fixed, high, low};

const POINT: char = '•';
const AXIS: char = '┤';
const LABEL_WIDTH: usize = 10;

/// Plot `prices` as a `width` x `height` scatter of points, high labelled on the top row
/// and low on the bottom row. Series wider than `width` are sampled evenly, always
/// keeping the first and last price.
pub fn plot(prices: &[f64], width: usize, height: usize) -> Vec<String> {
    if prices.is_empty() || width == 0 || height == 0 {
        return vec![];
    }

    let columns = resample(prices, width);
    let (min, max) = (low(prices), high(prices));
    let range = max - min;
    let top = height - 1;

    // flat series sit mid-chart
    let levels: Vec<usize> = columns
        .iter()
        .map(|&price| {
            if range > 0.0 {
                ((price - min) / range * top as f64).round() as usize
            } else {
                top / 2
            }
        })
        .collect();

    (0..height)
        .rev()
        .map(|row| {
            let label = match row {
                r if r == top => fmt_fixed(Some(max)),
                0 => fmt_fixed(Some(min)),
                _ => String::new(),
            };
            let cells: String = levels
                .iter()
                .map(|&level| if level == row { POINT } else { ' ' })
                .collect();
            format!("{label:>LABEL_WIDTH$} {AXIS}{}", cells.trim_end())
        })
        .collect()
}

/// The x-axis line under [`plot`]: first date at the left, last date at the right.
pub fn x_axis(first: &str, last: &str, width: usize) -> String {
    let pad = " ".repeat(LABEL_WIDTH + 2);
    let gap = width.saturating_sub(first.chars().count() + last.chars().count()).max(1);
    format!("{pad}{first}{}{last}", " ".repeat(gap))
}

fn resample(prices: &[f64], width: usize) -> Vec<f64> {
    if prices.len() <= width {
        return prices.to_vec();
    }
    if width == 1 {
        return vec![prices[prices.len() - 1]];
    }
    (0..width)
        .map(|i| prices[i * (prices.len() - 1) / (width - 1)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_series() {
        let lines = plot(&[1.0, 2.0, 3.0], 3, 3);
        assert_eq!(
            lines,
            vec![
                "      3.00 ┤  •".to_string(),
                "           ┤ •".to_string(),
                "      1.00 ┤•".to_string(),
            ]
        );
    }

    #[test]
    fn flat_series_sits_in_the_middle() {
        let lines = plot(&[5.0, 5.0], 2, 3);
        assert_eq!(lines[1], "           ┤••");
        assert_eq!(lines[0], "      5.00 ┤");
    }

    #[test]
    fn long_series_is_sampled() {
        let prices: Vec<f64> = (0..100).map(f64::from).collect();
        assert_eq!(resample(&prices, 5), vec![0.0, 24.0, 49.0, 74.0, 99.0]);
        let lines = plot(&prices, 5, 4);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.chars().count() <= LABEL_WIDTH + 2 + 5));
    }

    #[test]
    fn nothing_to_plot() {
        assert!(plot(&[], 10, 5).is_empty());
    }

    #[test]
    fn axis_spans_width() {
        let axis = x_axis("d1", "d2", 10);
        assert_eq!(axis, format!("{}d1      d2", " ".repeat(LABEL_WIDTH + 2)));
    }
}
