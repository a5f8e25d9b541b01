use std::path::PathBuf;

use crate::model::{FileKind, Patient, Report};

/// Built-in demo chart shown on launch. Real data arrives through the
/// same structures from whatever the host wires in.
pub fn patient() -> Patient {
    Patient {
        name: "W. A. Kumara Perera".to_string(),
        national_id: "752491836V".to_string(),
        age: "48".to_string(),
        gender: "Male".to_string(),
        address: "124/3 Temple Road, Kandy".to_string(),
        category: "General".to_string(),
    }
}

pub fn reports() -> Vec<Report> {
    let entry = |id: usize, file_name: &str, uploaded: &str, kind: FileKind| Report {
        id,
        file_name: file_name.to_string(),
        uploaded: uploaded.to_string(),
        kind,
        path: PathBuf::from("assets/samples").join(file_name),
        thumbnail: match kind {
            FileKind::Image => Some(PathBuf::from("assets/samples/thumbs").join(file_name)),
            FileKind::Pdf => None,
        },
    };

    vec![
        entry(1, "full-blood-count.pdf", "2025-10-28", FileKind::Pdf),
        entry(2, "chest-x-ray.png", "2025-11-02", FileKind::Image),
        entry(3, "lipid-profile.pdf", "2025-11-02", FileKind::Pdf),
        entry(4, "abdominal-ultrasound.jpg", "2025-11-09", FileKind::Image),
        entry(5, "fasting-glucose.pdf", "2025-11-14", FileKind::Pdf),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_report_ids_are_unique() {
        let reports = reports();
        for (i, a) in reports.iter().enumerate() {
            for b in &reports[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
