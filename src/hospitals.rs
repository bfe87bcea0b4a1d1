//! Static hospital directory.
//!
//! The directory is a constant table loaded with the binary. Records are
//! never added, removed or mutated at runtime; every view of the list is a
//! borrowed subset of [`HOSPITALS`].

/// A single hospital entry shown on the home screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hospital {
    /// Unique identifier within the directory
    pub id: &'static str,
    pub name: &'static str,
    /// Neighbourhood or street inside the city
    pub location: &'static str,
    pub city: &'static str,
    /// Average rating out of 5
    pub rating: f32,
    pub beds: u32,
    /// Specialties in display order
    pub specialties: &'static [&'static str],
    /// Pre-formatted distance label (e.g. "2.5 km")
    pub distance: &'static str,
}

impl Hospital {
    /// Message body for the details alert shown when a card is pressed
    pub fn details_message(&self) -> String {
        format!("Location: {}\nBeds: {}", self.location, self.beds)
    }
}

pub static HOSPITALS: [Hospital; 10] = [
    Hospital {
        id: "1",
        name: "Apollo Hospitals",
        location: "Banjara Hills",
        city: "Hyderabad",
        rating: 4.8,
        beds: 450,
        specialties: &["Cardiology", "Neurology", "Oncology"],
        distance: "2.5 km",
    },
    Hospital {
        id: "2",
        name: "Max Healthcare",
        location: "Sector 38",
        city: "Delhi",
        rating: 4.7,
        beds: 350,
        specialties: &["Orthopedics", "Cardiology", "Pediatrics"],
        distance: "3.2 km",
    },
    Hospital {
        id: "3",
        name: "Fortis Hospital",
        location: "Mulund",
        city: "Mumbai",
        rating: 4.6,
        beds: 400,
        specialties: &["Gastroenterology", "Urology", "Orthopedics"],
        distance: "4.1 km",
    },
    Hospital {
        id: "4",
        name: "AIIMS",
        location: "New Delhi",
        city: "Delhi",
        rating: 4.9,
        beds: 2000,
        specialties: &["All Specialties", "Emergency", "Research"],
        distance: "1.8 km",
    },
    Hospital {
        id: "5",
        name: "Manipal Hospital",
        location: "Whitefield",
        city: "Bangalore",
        rating: 4.7,
        beds: 380,
        specialties: &["Cardiology", "Neurosurgery", "Oncology"],
        distance: "5.3 km",
    },
    Hospital {
        id: "6",
        name: "Medanta Hospital",
        location: "Sector 38",
        city: "Gurgaon",
        rating: 4.8,
        beds: 500,
        specialties: &["Organ Transplant", "Cardiology", "Neurology"],
        distance: "2.8 km",
    },
    Hospital {
        id: "7",
        name: "Asian Hospital",
        location: "Karol Bagh",
        city: "Delhi",
        rating: 4.5,
        beds: 320,
        specialties: &["General Surgery", "Pediatrics", "ENT"],
        distance: "3.5 km",
    },
    Hospital {
        id: "8",
        name: "Jaslok Hospital",
        location: "Pedder Road",
        city: "Mumbai",
        rating: 4.6,
        beds: 380,
        specialties: &["Cardiology", "Laparoscopy", "Urology"],
        distance: "4.7 km",
    },
    Hospital {
        id: "9",
        name: "Aster CMI Hospital",
        location: "Bangalore",
        city: "Bangalore",
        rating: 4.7,
        beds: 420,
        specialties: &["Orthopedics", "Cardiology", "Gastroenterology"],
        distance: "6.1 km",
    },
    Hospital {
        id: "10",
        name: "Lilavati Hospital",
        location: "Bandra",
        city: "Mumbai",
        rating: 4.8,
        beds: 350,
        specialties: &["Oncology", "Cardiology", "Neurology"],
        distance: "5.9 km",
    },
];

/// Distinct cities in order of first appearance
pub fn cities(records: &[Hospital]) -> Vec<&'static str> {
    let mut cities: Vec<&'static str> = Vec::new();
    for hospital in records {
        if !cities.contains(&hospital.city) {
            cities.push(hospital.city);
        }
    }
    cities
}

/// Look up a hospital by id
#[cfg(test)]
pub fn find(id: &str) -> Option<&'static Hospital> {
    HOSPITALS.iter().find(|h| h.id == id)
}
