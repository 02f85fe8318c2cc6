use yew::prelude::*;

/// Rows and columns of the decorative grid.
pub fn grid_dimensions(compact: bool) -> (usize, usize) {
    if compact {
        (8, 12)
    } else {
        (16, 20)
    }
}

#[derive(Properties, PartialEq)]
pub struct BackgroundGridProps {
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(BackgroundGrid)]
pub fn background_grid(props: &BackgroundGridProps) -> Html {
    let (rows, cols) = grid_dimensions(props.compact);
    let style = format!("grid-template-columns: repeat({}, minmax(0, 1fr));", cols);

    html! {
        <div class="background-grid" aria-hidden="true">
            <div class="background-grid__cells" {style}>
                { for (0..rows * cols).map(|i| html! { <div key={i} class="background-grid__cell"></div> }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::grid_dimensions;

    #[test]
    fn compact_grid_is_smaller() {
        assert_eq!(grid_dimensions(false), (16, 20));
        assert_eq!(grid_dimensions(true), (8, 12));
    }
}
