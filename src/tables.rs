//! Bundled reference values
//!
//! Atomic masses are taken from the 2003 Atomic Mass Evaluation (amu).
//! Bound scattering lengths are the thermal-neutron values compiled by
//! Sears (1992) converted from fm to cm. Each complex length is stored as
//! `[re, im]`.
//!
//! Entries are keyed by `ZZAAAM` number and sorted by it.
//!

/// (ZZAAAM, atomic mass in amu)
pub(crate) const ATOMIC_WEIGHTS: &[(i32, f64)] = &[
    (10010, 1.00782503207),
    (10020, 2.0141017778),
    (10030, 3.0160492777),
    (20030, 3.0160293191),
    (20040, 4.00260325415),
    (30060, 6.015122795),
    (30070, 7.01600455),
    (40090, 9.0121822),
    (50100, 10.012937),
    (50110, 11.0093054),
    (60120, 12.0),
    (60130, 13.0033548378),
    (70140, 14.0030740048),
    (70150, 15.0001088982),
    (80160, 15.99491461957),
    (80170, 16.9991317),
    (80180, 17.999161),
    (110230, 22.9897692809),
    (130270, 26.98153863),
    (140280, 27.9769265325),
    (170350, 34.96885268),
    (170370, 36.96590259),
    (200400, 39.96259098),
    (230510, 50.9439595),
    (250550, 54.9380451),
    (260540, 53.9396105),
    (260560, 55.9349375),
    (270590, 58.933195),
    (280580, 57.9353429),
    (280600, 59.9307864),
    (290630, 62.9295975),
    (290650, 64.9277895),
    (461050, 104.905085),
    (491150, 114.903878),
    (621490, 148.9171847),
    (822080, 207.9766521),
    (832090, 208.9803987),
    (902320, 232.0380553),
    (922340, 234.0409521),
    (922350, 235.043931368),
    (922380, 238.0507882),
    (942390, 239.0521634),
    (942400, 240.0538135),
    (942420, 242.0587426),
    (952410, 241.0568291),
    (952420, 242.0595492),
    (952421, 242.059550625),
];

/// (ZZAAAM, [b_coherent re, im, b_incoherent re, im]) in cm
pub(crate) const SCATTERING_LENGTHS: &[(i32, [f64; 4])] = &[
    (10010, [-3.7406e-13, 0.0, 2.5274e-12, 0.0]),
    (10020, [6.671e-13, 0.0, 4.04e-13, 0.0]),
    (10030, [4.792e-13, 0.0, -1.04e-13, 0.0]),
    (20030, [5.74e-13, -1.483e-13, -2.5e-13, 2.568e-13]),
    (20040, [3.26e-13, 0.0, 0.0, 0.0]),
    (30060, [2.0e-13, -2.61e-14, -1.89e-13, 2.6e-14]),
    (30070, [-2.22e-13, 0.0, -2.49e-13, 0.0]),
    (40090, [7.79e-13, 0.0, 1.2e-14, 0.0]),
    (50100, [-1.0e-14, -1.066e-13, -4.7e-13, 1.231e-13]),
    (50110, [6.65e-13, 0.0, -1.3e-13, 0.0]),
    (60120, [6.6511e-13, 0.0, 0.0, 0.0]),
    (60130, [6.19e-13, 0.0, -5.2e-14, 0.0]),
    (70140, [9.37e-13, 0.0, 2.0e-13, 0.0]),
    (70150, [6.44e-13, 0.0, -2.0e-15, 0.0]),
    (80160, [5.803e-13, 0.0, 0.0, 0.0]),
    (80170, [5.78e-13, 0.0, 1.8e-14, 0.0]),
    (80180, [5.84e-13, 0.0, 0.0, 0.0]),
    (110230, [3.63e-13, 0.0, 3.59e-13, 0.0]),
    (130270, [3.449e-13, 0.0, 2.56e-14, 0.0]),
    (140280, [4.107e-13, 0.0, 0.0, 0.0]),
    (170350, [1.165e-12, 0.0, 6.1e-13, 0.0]),
    (170370, [3.08e-13, 0.0, 1.0e-14, 0.0]),
    (200400, [4.8e-13, 0.0, 0.0, 0.0]),
    (230510, [-4.02e-14, 0.0, 6.35e-13, 0.0]),
    (250550, [-3.73e-13, 0.0, 1.79e-13, 0.0]),
    (260540, [4.2e-13, 0.0, 0.0, 0.0]),
    (260560, [9.94e-13, 0.0, 0.0, 0.0]),
    (270590, [2.49e-13, 0.0, -6.2e-13, 0.0]),
    (280580, [1.44e-12, 0.0, 0.0, 0.0]),
    (280600, [2.8e-13, 0.0, 0.0, 0.0]),
    (290630, [6.43e-13, 0.0, 2.2e-14, 0.0]),
    (290650, [1.061e-12, 0.0, 1.79e-13, 0.0]),
    (461050, [5.5e-13, 0.0, -2.6e-13, 0.0]),
    (491150, [4.01e-13, -5.62e-15, -2.1e-13, 0.0]),
    (621490, [-1.92e-12, -1.17e-12, 3.14e-12, -1.03e-12]),
    (822080, [9.494e-13, 0.0, 0.0, 0.0]),
    (832090, [8.532e-13, 0.0, 2.59e-14, 0.0]),
    (902320, [1.031e-12, 0.0, 0.0, 0.0]),
    (922340, [1.24e-12, 0.0, 0.0, 0.0]),
    (922350, [1.047e-12, 0.0, 1.3e-13, 0.0]),
    (922380, [8.402e-13, 0.0, 0.0, 0.0]),
    (942400, [3.5e-13, 0.0, 0.0, 0.0]),
    (942420, [8.1e-13, 0.0, 0.0, 0.0]),
];
