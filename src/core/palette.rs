//! Static palettes and symbol vocabularies offered by option selectors.

/// Named qualitative palettes (hex-only) in selector order.
pub const QUALITATIVE_PALETTES: &[(&str, &[&str])] = &[
    (
        "Plotly",
        &[
            "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692",
            "#B6E880", "#FF97FF", "#FECB52",
        ],
    ),
    (
        "D3",
        &[
            "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2",
            "#7F7F7F", "#BCBD22", "#17BECF",
        ],
    ),
    (
        "G10",
        &[
            "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099", "#0099C6", "#DD4477",
            "#66AA00", "#B82E2E", "#316395",
        ],
    ),
    (
        "T10",
        &[
            "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B", "#EECA3B", "#B279A2",
            "#FF9DA6", "#9D755D", "#BAB0AC",
        ],
    ),
    (
        "Alphabet",
        &[
            "#AA0DFE", "#3283FE", "#85660D", "#782AB6", "#565656", "#1C8356", "#16FF32",
            "#F7E1A0", "#E2E2E2", "#1CBE4F", "#C4451C", "#DEA0FD", "#FE00FA", "#325A9B",
            "#FEAF16", "#F8A19F", "#90AD1C", "#F6222E", "#1CFFCE", "#2ED9FF", "#B10DA1",
            "#C075A6", "#FC1CBF", "#B00068", "#FBE426", "#FA0087",
        ],
    ),
    (
        "Dark24",
        &[
            "#2E91E5", "#E15F99", "#1CA71C", "#FB0D0D", "#DA16FF", "#222A2A", "#B68100",
            "#750D86", "#EB663B", "#511CFB", "#00A08B", "#FB00D1", "#FC0080", "#B2828D",
            "#6C7C32", "#778AAE", "#862A16", "#A777F1", "#620042", "#1616A7", "#DA60CA",
            "#6C4516", "#0D2A63", "#AF0038",
        ],
    ),
    (
        "Light24",
        &[
            "#FD3216", "#00FE35", "#6A76FC", "#FED4C4", "#FE00CE", "#0DF9FF", "#F6F926",
            "#FF9616", "#479B55", "#EEA6FB", "#DC587D", "#D626FF", "#6E899C", "#00B5F7",
            "#B68E00", "#C9FBE5", "#FF0092", "#22FFA7", "#E3EE9E", "#86CE00", "#BC7196",
            "#7E7DCD", "#FC6955", "#E48F72",
        ],
    ),
];

pub const DEFAULT_QUALITATIVE_PALETTE: &str = "Plotly";

/// Dash sequence cycled across `line_dash` groups.
pub const LINE_DASH_SEQUENCE: &[&str] = &[
    "solid",
    "dot",
    "dash",
    "longdash",
    "dashdot",
    "longdashdot",
];

/// Symbol sequence cycled across `symbol` groups.
pub const SYMBOL_SEQUENCE: &[&str] = &[
    "circle", "diamond", "square", "x", "cross", "triangle-up", "pentagon", "hexagram",
    "star", "hourglass",
];

/// Fill pattern sequence cycled across `pattern_shape` groups.
pub const PATTERN_SHAPE_SEQUENCE: &[&str] = &["", "/", "\\", "x", "-", "|", "+", "."];

/// Continuous colour scale names accepted by `color_continuous_scale`.
pub const NAMED_COLORSCALES: &[&str] = &[
    "aggrnyl", "agsunset", "algae", "amp", "armyrose", "balance", "blackbody", "bluered",
    "blues", "blugrn", "bluyl", "brbg", "brwnyl", "bugn", "bupu", "burg", "burgyl", "cividis",
    "curl", "darkmint", "deep", "delta", "dense", "earth", "edge", "electric", "emrld", "fall",
    "geyser", "gnbu", "gray", "greens", "greys", "haline", "hot", "hsv", "ice", "icefire",
    "inferno", "jet", "magenta", "magma", "matter", "mint", "mrybm", "mygbm", "oranges", "orrd",
    "oryel", "oxy", "peach", "phase", "picnic", "pinkyl", "piyg", "plasma", "plotly3",
    "portland", "prgn", "pubu", "pubugn", "puor", "purd", "purp", "purples", "purpor",
    "rainbow", "rdbu", "rdgy", "rdpu", "rdylbu", "rdylgn", "redor", "reds", "solar",
    "spectral", "speed", "sunset", "sunsetdark", "teal", "tealgrn", "tealrose", "tempo",
    "temps", "thermal", "tropic", "turbid", "turbo", "twilight", "viridis", "ylgn", "ylgnbu",
    "ylorbr", "ylorrd",
];

/// CSS colour names accepted by marker and line colour selectors.
pub const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgrey", "darkgreen", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "grey", "green",
    "greenyellow", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgrey", "lightgreen", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "red",
    "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell",
    "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen",
    "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

/// Marker symbols accepted by `marker_symbol`.
pub const MARKER_SYMBOLS: &[&str] = &[
    "arrow-bar-up", "circle", "hexagram", "star-diamond", "y-up", "diamond-wide", "octagon",
    "arrow-bar-down", "triangle-se", "cross", "triangle-left", "x-thin", "y-right",
    "star-triangle-down", "asterisk", "triangle-nw", "x", "diamond-cross", "arrow-down",
    "arrow-bar-right", "triangle-down", "arrow-bar-left", "circle-cross", "square-cross",
    "triangle-right", "diamond-x", "line-ns", "y-left", "line-nw", "hourglass", "arrow-right",
    "arrow-left", "diamond-tall", "triangle-up", "star", "y-down", "star-triangle-up",
    "hexagon2", "square-x", "hexagon", "pentagon", "hash", "triangle-ne", "line-ew", "line-ne",
    "diamond", "star-square", "cross-thin", "circle-x", "bowtie", "triangle-sw", "arrow-up",
    "square",
];

#[must_use]
pub fn qualitative_palette(name: &str) -> Option<&'static [&'static str]> {
    QUALITATIVE_PALETTES
        .iter()
        .find(|(palette_name, _)| *palette_name == name)
        .map(|(_, colors)| *colors)
}

#[must_use]
pub fn default_qualitative_palette() -> &'static [&'static str] {
    QUALITATIVE_PALETTES[0].1
}
