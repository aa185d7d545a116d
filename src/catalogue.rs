//! The bundled set of batik motifs.

use crate::gallery::Motif;

pub fn motifs() -> Vec<Motif> {
    vec![
        Motif::new(
            "Parang",
            "Diagonal rows of interlocking S-shapes, like waves breaking on a rock. \
             Once reserved for the royal court, it stands for unbroken effort.",
            "#8b4513",
            "images/parang.png",
        ),
        Motif::new(
            "Kawung",
            "Four ovals arranged around a centre point, after the cross-section of \
             the sugar palm fruit. A symbol of purity and order.",
            "#5c4033",
            "images/kawung.png",
        ),
        Motif::new(
            "Mega Mendung",
            "Layered cloud shapes in graded blues from the coastal town of Cirebon, \
             read as patience and a calm mind.",
            "#1e5aa8",
            "images/mega_mendung.png",
        ),
        Motif::new(
            "Truntum",
            "Small star-like blossoms scattered on a dark ground. Worn by the \
             parents at a wedding as a sign of love that grows again.",
            "#2f1b0c",
            "images/truntum.png",
        ),
        Motif::new(
            "Sido Mukti",
            "A grid of panels framing butterflies, buildings and wings, wishing \
             the wearer lasting prosperity.",
            "#a0522d",
            "images/sido_mukti.png",
        ),
        Motif::new(
            "Ceplok",
            "Repeating geometric rosettes built from circles, stars and squares, \
             one of the oldest families of batik patterns.",
            "#6b8e23",
            "images/ceplok.png",
        ),
    ]
}
