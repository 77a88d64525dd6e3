//! Randomised labelling regression test
//!
//! Labels seeded random images and checks the result against a brute-force
//! 4-connected flood fill: both must produce the same partition, and every
//! clip region must be the exact bounding box and pixel count of its region.
//!
//! Run with:
//! ```
//! cargo test -p koki-label --test label_random_reg
//! ```

use koki_core::GrayImage;
use koki_label::{LabelledImage, label_image};
use koki_test::RegParams;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet, VecDeque};

const THRESHOLD: f32 = 128.0;

fn random_image(rng: &mut StdRng, density: f64) -> GrayImage {
    let w = rng.random_range(1..=48u16);
    let h = rng.random_range(1..=48u16);
    let data = (0..w as usize * h as usize)
        .map(|_| {
            if rng.random_bool(density) {
                rng.random_range(0..128u8)
            } else {
                rng.random_range(128..=255u8)
            }
        })
        .collect();
    GrayImage::from_raw(w, h, data).expect("random image")
}

/// Component id per pixel (0 = background) via breadth-first flood fill.
fn flood_fill_components(image: &GrayImage) -> (Vec<u32>, u32) {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let fg: Vec<bool> = image.data().iter().map(|&v| (v as f32) < THRESHOLD).collect();
    let mut comp = vec![0u32; w * h];
    let mut next = 0u32;
    let mut queue = VecDeque::new();

    for start in 0..w * h {
        if !fg[start] || comp[start] != 0 {
            continue;
        }
        next += 1;
        comp[start] = next;
        queue.push_back(start);

        while let Some(idx) = queue.pop_front() {
            let (x, y) = (idx % w, idx / w);
            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push(idx - 1);
            }
            if x + 1 < w {
                neighbours.push(idx + 1);
            }
            if y > 0 {
                neighbours.push(idx - w);
            }
            if y + 1 < h {
                neighbours.push(idx + w);
            }
            for n in neighbours {
                if fg[n] && comp[n] == 0 {
                    comp[n] = next;
                    queue.push_back(n);
                }
            }
        }
    }

    (comp, next)
}

/// Check one labelled image against the oracle. Returns a description of the
/// first inconsistency found.
fn verify(image: &GrayImage, labelled: &LabelledImage) -> Result<(), String> {
    let w = image.width() as usize;
    let (comp, num_comps) = flood_fill_components(image);

    // Same partition: the label <-> component mapping must be a bijection
    let mut label_to_comp: HashMap<u16, u32> = HashMap::new();
    let mut comp_to_label: HashMap<u32, u16> = HashMap::new();
    for (idx, (&label, &c)) in labelled.labels().iter().zip(&comp).enumerate() {
        if (label == 0) != (c == 0) {
            return Err(format!("foreground mismatch at pixel {}", idx));
        }
        if label == 0 {
            continue;
        }
        if *label_to_comp.entry(label).or_insert(c) != c
            || *comp_to_label.entry(c).or_insert(label) != label
        {
            return Err(format!("partition mismatch at pixel {}", idx));
        }
        if !labelled.is_canonical(label) {
            return Err(format!("non-canonical label {} in grid", label));
        }
    }
    if labelled.num_regions() != num_comps as usize {
        return Err(format!(
            "{} regions, oracle found {}",
            labelled.num_regions(),
            num_comps
        ));
    }

    // Every labelled pixel lies inside its region's box
    for (idx, &label) in labelled.labels().iter().enumerate() {
        if label == 0 {
            continue;
        }
        let (x, y) = ((idx % w) as i32, (idx / w) as i32);
        let clip = labelled.clip(label).map_err(|e| e.to_string())?;
        if !clip.contains(x, y) {
            return Err(format!("pixel ({}, {}) outside box of label {}", x, y, label));
        }
    }

    // Exact boxes and masses
    let mut expected: HashMap<u16, (usize, usize, usize, usize, u32)> = HashMap::new();
    for (idx, &label) in labelled.labels().iter().enumerate() {
        if label == 0 {
            continue;
        }
        let (x, y) = (idx % w, idx / w);
        let e = expected.entry(label).or_insert((x, y, x, y, 0));
        e.0 = e.0.min(x);
        e.1 = e.1.min(y);
        e.2 = e.2.max(x);
        e.3 = e.3.max(y);
        e.4 += 1;
    }

    let mut total_mass = 0usize;
    for (label, clip) in labelled.regions() {
        let &(x0, y0, x1, y1, mass) = expected
            .get(&label)
            .ok_or_else(|| format!("canonical label {} has no pixels", label))?;
        if (clip.min.x as usize, clip.min.y as usize, clip.max.x as usize, clip.max.y as usize)
            != (x0, y0, x1, y1)
        {
            return Err(format!("label {}: box {:?} not minimal", label, clip));
        }
        if clip.mass != mass {
            return Err(format!("label {}: mass {} vs {}", label, clip.mass, mass));
        }
        total_mass += clip.mass as usize;
    }
    if total_mass + labelled.background_count() != labelled.labels().len() {
        return Err("masses and background do not cover the image".to_string());
    }

    // Alias table: idempotent, points at the smallest member, clips mirror root
    for label in 1..=labelled.num_provisional() as u16 {
        let root = labelled.resolve(label);
        if labelled.resolve(root) != root {
            return Err(format!("resolve not idempotent for {}", label));
        }
        if labelled.alias(label).ok() != Some(root) || root > label {
            return Err(format!("alias of {} is not its root {}", label, root));
        }
        if labelled.clips()[label as usize - 1] != labelled.clips()[root as usize - 1] {
            return Err(format!("clip of {} differs from root {}", label, root));
        }
    }

    // Canonical labels are ordered by their first pixel in raster order
    let mut seen = HashSet::new();
    let mut last = 0u16;
    for &label in labelled.labels() {
        if label != 0 && seen.insert(label) {
            if label < last {
                return Err(format!("label {} first seen after {}", label, last));
            }
            last = label;
        }
    }

    Ok(())
}

#[test]
fn label_random_reg() {
    let mut rp = RegParams::new("label_random");
    let mut rng = StdRng::seed_from_u64(0x6b6f6b69);

    for density in [0.1, 0.35, 0.5, 0.6, 0.8, 0.95] {
        let mut failures = 0;
        for _ in 0..40 {
            let image = random_image(&mut rng, density);
            let labelled = match label_image(&image, THRESHOLD) {
                Ok(l) => l,
                Err(e) => panic!("labelling failed: {}", e),
            };
            if let Err(msg) = verify(&image, &labelled) {
                eprintln!(
                    "  {}x{} density {}: {}",
                    image.width(),
                    image.height(),
                    density,
                    msg
                );
                failures += 1;
            }
        }
        eprintln!("  density {}: {} failures", density, failures);
        rp.compare_values(0.0, failures as f64, 0.0);
    }

    assert!(rp.cleanup(), "random labelling regression test failed");
}

#[test]
fn label_random_large_reg() {
    let mut rp = RegParams::new("label_random_large");
    let mut rng = StdRng::seed_from_u64(2024);

    // Mazes of thin strokes produce many merges per row
    let (w, h) = (640u16, 480u16);
    let data = (0..w as usize * h as usize)
        .map(|i| {
            let (x, y) = (i % w as usize, i / w as usize);
            let stroke = x % 3 == 0 || y % 5 == 0;
            if stroke && rng.random_bool(0.9) { 0 } else { 255 }
        })
        .collect();
    let image = GrayImage::from_raw(w, h, data).expect("maze image");
    let labelled = label_image(&image, THRESHOLD).expect("label maze");

    let ok = verify(&image, &labelled);
    if let Err(msg) = &ok {
        eprintln!("  {}", msg);
    }
    rp.compare_bool(true, ok.is_ok());
    eprintln!(
        "  {} provisional labels, {} regions",
        labelled.num_provisional(),
        labelled.num_regions()
    );
    rp.compare_bool(true, labelled.num_regions() <= labelled.num_provisional());

    assert!(rp.cleanup(), "large random labelling regression test failed");
}
