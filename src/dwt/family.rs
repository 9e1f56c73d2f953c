//! Wavelet family registry.
//!
//! Closed set of orthogonal wavelets usable with the transform: Haar,
//! Daubechies 1-8, Symlets 4 and 8, Coiflets 1 and 2. Each family is
//! defined by its scaling (low-pass reconstruction) filter; the other
//! three filters of the two-channel bank are derived from it by the
//! quadrature-mirror relations.

use crate::error::DenoiseError;

/// Supported orthogonal wavelet families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wavelet {
    Haar,
    /// Daubechies wavelet with N vanishing moments (db1-db8).
    Daubechies(u8),
    /// Symlet wavelet (sym4, sym8).
    Symlet(u8),
    /// Coiflet wavelet (coif1, coif2).
    Coiflet(u8),
}

/// The four filters of a two-channel perfect-reconstruction bank.
#[derive(Debug, Clone)]
pub(crate) struct FilterBank {
    pub dec_lo: Vec<f64>,
    pub dec_hi: Vec<f64>,
    pub rec_lo: Vec<f64>,
    pub rec_hi: Vec<f64>,
}

// Scaling filters in reconstruction (rec_lo) order, matching the tables
// published for the standard orthogonal families.

const HAAR: [f64; 2] = [std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2];

const DB2: [f64; 4] = [
    0.48296291314469025,
    0.836516303737469,
    0.22414386804185735,
    -0.12940952255092145,
];

const DB3: [f64; 6] = [
    0.3326705529509569,
    0.8068915093133388,
    0.4598775021193313,
    -0.13501102001039084,
    -0.08544127388224149,
    0.035226291882100656,
];

const DB4: [f64; 8] = [
    0.23037781330885523,
    0.7148465705525415,
    0.6308807679295904,
    -0.02798376941698385,
    -0.18703481171888114,
    0.030841381835986965,
    0.032883011666982945,
    -0.010597401784997278,
];

const DB5: [f64; 10] = [
    0.160102397974125,
    0.6038292697974729,
    0.7243085284385744,
    0.13842814590110342,
    -0.24229488706619015,
    -0.03224486958502952,
    0.07757149384006515,
    -0.006241490213011705,
    -0.012580751999015526,
    0.003335725285001549,
];

const DB6: [f64; 12] = [
    0.11154074335008017,
    0.4946238903983854,
    0.7511339080215775,
    0.3152503517092432,
    -0.22626469396516913,
    -0.12976686756709563,
    0.09750160558707936,
    0.02752286553001629,
    -0.031582039318031156,
    0.000553842200993802,
    0.004777257511010651,
    -0.001077301085308479,
];

const DB7: [f64; 14] = [
    0.07785205408506236,
    0.39653931948230575,
    0.7291320908465551,
    0.4697822874053586,
    -0.14390600392910627,
    -0.22403618499416572,
    0.07130921926705004,
    0.08061260915107307,
    -0.03802993693503463,
    -0.01657454163101562,
    0.012550998556013784,
    0.00042957797300470274,
    -0.0018016407039998328,
    0.0003537138000010399,
];

const DB8: [f64; 16] = [
    0.05441584224308161,
    0.3128715909144659,
    0.6756307362980128,
    0.5853546836548691,
    -0.015829105256023893,
    -0.2840155429624281,
    0.00047248457399797254,
    0.128747426620186,
    -0.01736930100202211,
    -0.04408825393106472,
    0.013981027917015516,
    0.008746094047015655,
    -0.00487035299301066,
    -0.0003917403729959771,
    0.0006754494059985568,
    -0.00011747678400228192,
];

const SYM4: [f64; 8] = [
    -0.07576571478927333,
    -0.02963552764599851,
    0.49761866763201545,
    0.8037387518059161,
    0.29785779560527736,
    -0.09921954357684722,
    -0.012603967262037833,
    0.0322231006040427,
];

const SYM8: [f64; 16] = [
    -0.0033824159510061256,
    -0.0005421323317911481,
    0.03169508781149298,
    0.007607487324917605,
    -0.1432942383508097,
    -0.061273359067658524,
    0.4813596512583722,
    0.7771857517005235,
    0.3644418948353314,
    -0.05194583810770904,
    -0.027219029917056003,
    0.049137179673607506,
    0.003808752013890615,
    -0.01495225833704823,
    -0.0003029205147213668,
    0.0018899503327594609,
];

const COIF1: [f64; 6] = [
    -0.01565572813546454,
    -0.0727326195128539,
    0.38486484686420286,
    0.8525720202122554,
    0.3378976624578092,
    -0.0727326195128539,
];

const COIF2: [f64; 12] = [
    -0.000720549445364512,
    -0.0018232088707029932,
    0.0056114348193944995,
    0.023680171946334084,
    -0.0594344186464569,
    -0.0764885990783064,
    0.41700518442169254,
    0.8127236354455423,
    0.3861100668211622,
    -0.06737255472196302,
    -0.04146493678175915,
    0.016387336463522112,
];

/// Names accepted by [`Wavelet::parse`], in registry order.
pub const WAVELIST: [&str; 13] = [
    "haar", "db1", "db2", "db3", "db4", "db5", "db6", "db7", "db8", "sym4", "sym8", "coif1",
    "coif2",
];

/// Returns the names of every supported wavelet.
pub fn wavelist() -> &'static [&'static str] {
    &WAVELIST
}

impl Wavelet {
    /// Membership query over the supported set. Names are matched
    /// case-sensitively; anything else is a configuration error.
    pub fn parse(name: &str) -> Result<Self, DenoiseError> {
        match name {
            "haar" => Ok(Self::Haar),
            "db1" => Ok(Self::Daubechies(1)),
            "db2" => Ok(Self::Daubechies(2)),
            "db3" => Ok(Self::Daubechies(3)),
            "db4" => Ok(Self::Daubechies(4)),
            "db5" => Ok(Self::Daubechies(5)),
            "db6" => Ok(Self::Daubechies(6)),
            "db7" => Ok(Self::Daubechies(7)),
            "db8" => Ok(Self::Daubechies(8)),
            "sym4" => Ok(Self::Symlet(4)),
            "sym8" => Ok(Self::Symlet(8)),
            "coif1" => Ok(Self::Coiflet(1)),
            "coif2" => Ok(Self::Coiflet(2)),
            _ => Err(DenoiseError::config(format!(
                "unknown wavelet '{}' (supported: {})",
                name,
                WAVELIST.join(", ")
            ))),
        }
    }

    /// Canonical name of this wavelet.
    pub fn name(&self) -> String {
        match self {
            Self::Haar => "haar".to_string(),
            Self::Daubechies(n) => format!("db{}", n),
            Self::Symlet(n) => format!("sym{}", n),
            Self::Coiflet(n) => format!("coif{}", n),
        }
    }

    /// Scaling filter (reconstruction low-pass) of this family.
    pub(crate) fn scaling_filter(&self) -> &'static [f64] {
        match self {
            Self::Haar | Self::Daubechies(1) => &HAAR,
            Self::Daubechies(2) => &DB2,
            Self::Daubechies(3) => &DB3,
            Self::Daubechies(4) => &DB4,
            Self::Daubechies(5) => &DB5,
            Self::Daubechies(6) => &DB6,
            Self::Daubechies(7) => &DB7,
            Self::Daubechies(8) => &DB8,
            Self::Symlet(4) => &SYM4,
            Self::Symlet(8) => &SYM8,
            Self::Coiflet(1) => &COIF1,
            Self::Coiflet(2) => &COIF2,
            // `parse` never produces these; constructing them by hand is a
            // programming error, not a runtime configuration error.
            Self::Daubechies(n) => panic!("unsupported Daubechies order {}", n),
            Self::Symlet(n) => panic!("unsupported Symlet order {}", n),
            Self::Coiflet(n) => panic!("unsupported Coiflet order {}", n),
        }
    }

    /// Filter length of this family.
    pub fn filter_len(&self) -> usize {
        self.scaling_filter().len()
    }

    /// Derive the full analysis/synthesis bank from the scaling filter.
    ///
    /// The high-pass pair follows the quadrature-mirror relation
    /// `rec_hi[k] = (-1)^k * rec_lo[m-1-k]`; the analysis filters are the
    /// time-reversed synthesis filters.
    pub(crate) fn bank(&self) -> FilterBank {
        let h = self.scaling_filter();
        let m = h.len();
        let rec_lo = h.to_vec();
        let rec_hi: Vec<f64> = (0..m)
            .map(|k| {
                let v = h[m - 1 - k];
                if k % 2 == 0 {
                    v
                } else {
                    -v
                }
            })
            .collect();
        let dec_lo: Vec<f64> = rec_lo.iter().rev().copied().collect();
        let dec_hi: Vec<f64> = rec_hi.iter().rev().copied().collect();
        FilterBank {
            dec_lo,
            dec_hi,
            rec_lo,
            rec_hi,
        }
    }
}

/// Maximum useful decomposition depth for a signal of length `n`.
///
/// Follows the usual rule `floor(log2(n / (filter_len - 1)))`: beyond this
/// depth the approximation band becomes shorter than the filter support and
/// the decomposition stops being meaningful.
pub fn max_level(n: usize, wavelet: Wavelet) -> usize {
    let m = wavelet.filter_len();
    let ratio = n as f64 / (m - 1) as f64;
    if ratio < 2.0 {
        0
    } else {
        ratio.log2() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for name in wavelist() {
            let w = Wavelet::parse(name).expect("listed name must parse");
            if *name != "haar" && *name != "db1" {
                assert_eq!(&w.name(), name);
            }
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(Wavelet::parse("not_a_real_wavelet").is_err());
        assert!(Wavelet::parse("db9").is_err());
        assert!(Wavelet::parse("").is_err());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Wavelet::parse("Haar").is_err());
        assert!(Wavelet::parse("DB4").is_err());
    }

    #[test]
    fn test_haar_db1_alias() {
        let haar = Wavelet::parse("haar").unwrap();
        let db1 = Wavelet::parse("db1").unwrap();
        assert_eq!(haar.scaling_filter(), db1.scaling_filter());
    }

    #[test]
    fn test_filter_lengths() {
        assert_eq!(Wavelet::Haar.filter_len(), 2);
        assert_eq!(Wavelet::Daubechies(4).filter_len(), 8);
        assert_eq!(Wavelet::Symlet(8).filter_len(), 16);
        assert_eq!(Wavelet::Coiflet(2).filter_len(), 12);
    }

    /// The scaling filter of an orthonormal wavelet must sum to sqrt(2),
    /// have unit energy, and be orthogonal to its own even shifts. Any
    /// transcription error in the coefficient tables breaks at least one
    /// of these identities.
    #[test]
    fn test_orthonormality_identities() {
        let checked = [
            Wavelet::Haar,
            Wavelet::Daubechies(2),
            Wavelet::Daubechies(3),
            Wavelet::Daubechies(4),
            Wavelet::Daubechies(6),
            Wavelet::Daubechies(8),
            Wavelet::Symlet(4),
            Wavelet::Symlet(8),
            Wavelet::Coiflet(1),
        ];
        for w in checked {
            let h = w.scaling_filter();
            let m = h.len();

            let sum: f64 = h.iter().sum();
            assert!(
                (sum - std::f64::consts::SQRT_2).abs() < 1e-7,
                "{}: filter sum {} != sqrt(2)",
                w.name(),
                sum
            );

            let energy: f64 = h.iter().map(|v| v * v).sum();
            assert!(
                (energy - 1.0).abs() < 1e-7,
                "{}: filter energy {} != 1",
                w.name(),
                energy
            );

            for shift in (2..m).step_by(2) {
                let dot: f64 = (0..m - shift).map(|j| h[j] * h[j + shift]).sum();
                assert!(
                    dot.abs() < 1e-7,
                    "{}: double-shift orthogonality violated at shift {}: {}",
                    w.name(),
                    shift,
                    dot
                );
            }
        }
    }

    #[test]
    fn test_qmf_bank_relations() {
        let bank = Wavelet::Daubechies(2).bank();
        // Analysis filters are the reversed synthesis filters.
        let rev_lo: Vec<f64> = bank.rec_lo.iter().rev().copied().collect();
        assert_eq!(bank.dec_lo, rev_lo);
        // High-pass and low-pass synthesis filters are orthogonal.
        let dot: f64 = bank
            .rec_lo
            .iter()
            .zip(bank.rec_hi.iter())
            .map(|(a, b)| a * b)
            .sum();
        assert!(dot.abs() < 1e-10, "lo/hi not orthogonal: {}", dot);
    }

    #[test]
    fn test_max_level() {
        assert_eq!(max_level(1024, Wavelet::Haar), 10);
        assert_eq!(max_level(1024, Wavelet::Daubechies(4)), 7);
        assert_eq!(max_level(4, Wavelet::Daubechies(4)), 0);
        assert_eq!(max_level(0, Wavelet::Haar), 0);
    }
}
