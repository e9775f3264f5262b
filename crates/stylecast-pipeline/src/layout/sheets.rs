//! Static companion sheets for the layout module.
//!
//! These consume the custom properties produced by the geometry
//! resolver. They are fixed text: only the base geometry sheet varies
//! with configuration.

/// Grid column strategies and the layout utility classes built on them.
pub const UTILITIES: &str = r#"@layer base {
    [data-layout] {
        --_gaps-count: calc(var(--layout-columns-count) - 1);
        --_gaps-sum: calc(var(--layout-gap) * var(--_gaps-count));
        --_columns-sum: calc(var(--layout-container) - var(--_gaps-sum));
        --_asides-columns-sum: calc(var(--layout-aside-left-columns-count) + var(--layout-aside-right-columns-count));
        --_column-width: calc(var(--_columns-sum) / var(--layout-columns-count));
        --_cols-1-2: calc(var(--layout-columns-count) / 2);

        /* Column strategies */

        --_wide-layout-columns-strategy:
            [c-full-width-start] var(--layout-extra-margin)
            var(--_boxed-layout-columns-strategy)
            var(--layout-extra-margin) [c-full-width-end];

        @media (min-width: 64rem) {
            --_wide-layout-columns-strategy:
                [c-full-width-start] minmax(0, 1fr)
                var(--_boxed-layout-columns-strategy)
                minmax(0, 1fr) [c-full-width-end];
        }

        --_boxed-layout-columns-strategy:
            [c-container-start c-main-start] repeat(var(--_cols-1-2), minmax(0, var(--_column-width)))
            [center]
            repeat(var(--_cols-1-2), minmax(0, var(--_column-width))) [c-container-end c-main-end];

        /* Global rows */

        --_global-rows:
            [r-header] auto
            [r-intro] auto
            [r-aside-left] auto
            [r-main] 1fr
            [r-aside-right] auto
            [r-outro] auto
            [r-footer] auto;

        @media (min-width: 64rem) {
            --_global-rows:
                [r-header] auto
                [r-intro] auto
                [r-aside-left r-main r-aside-right] 1fr
                [r-outro] auto
                [r-footer] auto;
        }

        /* Aside left */

        &:has(#aside-left):not(#aside-right) {
            --_boxed-layout-columns-strategy:
                [c-container-start c-aside-left-start c-main-start] repeat(var(--_cols-1-2), minmax(0, 1fr))
                [center]
                repeat(var(--_cols-1-2), minmax(0, 1fr)) [c-container-end c-aside-left-end c-main-end];

            @media (min-width: 64rem) {
                --_boxed-layout-columns-strategy:
                    [c-container-start c-aside-left-start] repeat(var(--layout-single-aside-columns-count), minmax(0, var(--_column-width)))
                    [c-aside-left-end c-main-start] repeat(calc((var(--layout-columns-count) - var(--layout-single-aside-columns-count)) / 2), minmax(0, var(--_column-width)))
                    [center]
                    repeat(calc((var(--layout-columns-count) - var(--layout-single-aside-columns-count)) / 2), minmax(0, var(--_column-width))) [c-main-end c-container-end];

                #main {
                    grid-column-start: c-main;
                }
            }
        }

        /* Aside right */

        &:has(#aside-right):not(#aside-left) {
            --_boxed-layout-columns-strategy:
                [c-container-start c-main-start c-aside-right-start] repeat(var(--_cols-1-2), minmax(0, 1fr))
                [center]
                repeat(var(--_cols-1-2), minmax(0, 1fr)) [c-container-end c-main-end c-aside-right-end];

            @media (min-width: 64rem) {
                --_boxed-layout-columns-strategy:
                    [c-container-start c-main-start] repeat(calc((var(--layout-columns-count) - var(--layout-single-aside-columns-count)) / 2), minmax(0, var(--_column-width)))
                    [center]
                    repeat(calc((var(--layout-columns-count) - var(--layout-single-aside-columns-count)) / 2), minmax(0, var(--_column-width))) [c-main-end c-aside-right-start]
                    repeat(var(--layout-single-aside-columns-count), minmax(0, var(--_column-width))) [c-aside-right-end c-container-end];

                #main {
                    grid-column-end: c-main;
                }
            }
        }

        /* Aside left and right */

        &:has(#aside-left):has(#aside-right) {
            --_boxed-layout-columns-strategy:
                [c-container-start c-aside-left-start c-main-start c-aside-right-start] repeat(var(--_cols-1-2), minmax(0, 1fr))
                [center]
                repeat(var(--_cols-1-2), minmax(0, 1fr)) [c-container-end c-aside-left-end c-main-end c-aside-right-end];

            @media (min-width: 64rem) {
                --_boxed-layout-columns-strategy:
                    [c-container-start c-aside-left-start] repeat(var(--layout-aside-left-columns-count), minmax(0, var(--_column-width)))
                    [c-aside-left-end c-main-start] repeat(calc((var(--layout-columns-count) - var(--_asides-columns-sum)) / 2), minmax(0, var(--_column-width)))
                    [center]
                    repeat(calc((var(--layout-columns-count) - var(--_asides-columns-sum)) / 2), minmax(0, var(--_column-width))) [c-main-end c-aside-right-start]
                    repeat(var(--layout-aside-right-columns-count), minmax(0, var(--_column-width))) [c-container-end c-aside-right-end];
            }
        }
    }

    [data-layout="no-gap"] {
        --_column-width: calc(var(--layout-container) / var(--layout-columns-count));
    }
}

@utility grid-layout-columns-wide {
    display: grid;
    grid-template-columns: var(--_wide-layout-columns-strategy);
    column-gap: var(--layout-gap);
}

@utility grid-layout-columns {
    display: grid;
    grid-template-columns: var(--_boxed-layout-columns-strategy);
    column-gap: var(--layout-gap);
}

@utility subgrid-x {
    display: grid;
    grid-template-columns: subgrid;
}

@utility subgrid-y {
    display: grid;
    grid-template-rows: subgrid;
}

@utility subgrid {
    display: grid;
    grid-template-columns: subgrid;
    grid-template-rows: subgrid;
}"#;

/// The top-level grid container itself.
pub const STRUCTURE: &str = r#"@layer base {
    html,
    body {
        overflow-x: hidden;
    }

    [data-layout] {
        --_cols-gap: var(--layout-gap);
        --_rows: var(--_global-rows);
        --_cols: var(--_wide-layout-columns-strategy);

        min-height: 100dvh;
        display: grid;
        grid-template-columns: var(--_cols);
        grid-template-rows: var(--_rows);
        grid-auto-rows: auto;
        column-gap: var(--_cols-gap);
    }

    [data-layout="no-gap"] {
        --_cols-gap: 0;
    }
}"#;

/// Row/column placement for the page landmarks (header, main, asides...).
pub const LANDMARKS: &str = r#"@layer base {
    [data-layout] {
        >:is(#header, #main, [id*="aside-"], #intro, #outro, #footer) {
            grid-column: c-full-width;
            display: grid;
            grid-template-columns: subgrid;
            align-items: start;
            align-content: start;

            >:not([class*="-area"]) {
                grid-column: var(--_area, c-main);
                align-self: start;
            }
        }

        > #header {
            --_area: c-container;

            grid-row: r-header;
            z-index: 5;
        }

        > #intro {
            --_area: c-container;

            grid-row: r-intro;
            z-index: 2;
        }

        > #aside-left {
            --_area: c-aside-left;

            grid-row: r-aside-left;
            z-index: 2;

            @media (min-width: 64rem) {
                grid-column: c-full-width / c-aside-left;
            }
        }

        > #main {
            grid-row: r-main;
            z-index: 1;
        }

        > #aside-right {
            --_area: c-aside-right;

            grid-row: r-aside-right;
            z-index: 3;

            @media (min-width: 64rem) {
                grid-column: c-aside-right / c-full-width;
            }
        }

        > #outro {
            --_area: c-container;

            grid-row: r-outro;
            z-index: 2;
        }

        > #footer {
            --_area: c-container;

            grid-row: r-footer;
            z-index: 4;
        }
    }
}"#;

/// Named area utility classes spanning the grid column lines.
pub const AREAS: &str = r#"@layer utilities {
    [data-layout] {
        [class*="-area"] {
            /* All sub *-area classes */

            &:has(>[class*="-area"]) {
                @apply subgrid-x;
            }

            >:not([class*="-area"]) {
                grid-column: var(--_area, c-main);
            }
        }
    }
}

/* Wide */

@utility wide-area {
    grid-column: c-full-width;
}

@utility wide-half-left-area {
    grid-column: c-full-width / center;
}

@utility wide-half-right-area {
    grid-column: center / c-full-width-end;
}

/* Container */

@utility container-area {
    grid-column: c-container;
}

@utility container-wide-left-area {
    grid-column: c-full-width / c-container-end;
}

@utility container-wide-right-area {
    grid-column: c-container / c-full-width-end;
}

@utility container-half-left-area {
    grid-column: c-container / center;
}

@utility container-half-right-area {
    grid-column: center / c-container;
}

@utility container-third-left-area {
    @media (min-width: 48rem) {
        grid-column: c-container / span 2;
    }

    @media (min-width: 64rem) {
        grid-column: c-container / span 4;
    }
}

@utility container-two-third-right-area {
    @media (min-width: 48rem) {
        grid-column: span 4;
    }

    @media (min-width: 64rem) {
        grid-column: span 8;
    }
}

@utility container-two-third-left-area {
    @media (min-width: 48rem) {
        grid-column: c-container / span 4;
    }

    @media (min-width: 64rem) {
        grid-column: c-container / span 8;
    }
}

@utility container-third-right-area {
    @media (min-width: 48rem) {
        grid-column: span 2;
    }

    @media (min-width: 64rem) {
        grid-column: span 4;
    }
}

/* Main */

@utility main-area {
    grid-column: c-main;
}

@utility half-left-area {
    grid-column: c-main / center;
}

@utility half-right-area {
    grid-column: center / c-main;
}

/* Aside */

@utility aside-left-area {
    grid-column: c-aside-left;
}

@utility aside-right-area {
    grid-column: c-aside-right;
}

/* Margin */

@utility margin-left-area {
    grid-column: c-full-width / c-container-start;
}

@utility margin-right-area {
    grid-column: c-container-end / c-full-width-end;
}"#;

/// `@import` index tying the layout sheets together.
pub const INDEX: &str = r#"@import "./_base-layout.css";
@import "./_layout-utilities.css";
@import "./_layout-structure.css";
@import "./_layout-landmarks.css";
@import "./_layout-areas.css";
"#;
