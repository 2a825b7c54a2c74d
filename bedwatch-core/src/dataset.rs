//! Reference dataset loaded once at startup.

use crate::record::{Category, Charges, HospitalRecord, Vacancy};

/// The static reference collection of 20 hospitals, in display order.
pub fn load_dataset() -> Vec<HospitalRecord> {
    vec![
        entry(
            "1",
            "Mumbai",
            "Lilavati Hospital and Research Centre",
            Category::Private,
            "A-791, Bandra Reclamation, Bandra West, Mumbai, Maharashtra 400050",
            Charges::Paid,
            450,
            [12, 8, 5, 3],
            (19.0596, 72.8295),
        ),
        entry(
            "2",
            "Mumbai",
            "KEM Hospital",
            Category::Government,
            "489, Rasta Peth, Sardar Moodliar Road, Near Agripada Police Station, Mumbai, Maharashtra 400012",
            Charges::Free,
            800,
            [45, 23, 12, 8],
            (18.9894, 72.8355),
        ),
        entry(
            "3",
            "Delhi",
            "AIIMS Delhi",
            Category::Government,
            "Ansari Nagar, New Delhi, Delhi 110029",
            Charges::Free,
            2500,
            [0, 2, 0, 1],
            (28.5672, 77.2100),
        ),
        entry(
            "4",
            "Delhi",
            "Max Super Speciality Hospital",
            Category::Private,
            "1, Press Enclave Marg, Saket Institutional Area, Saket, New Delhi, Delhi 110017",
            Charges::Paid,
            550,
            [18, 15, 10, 7],
            (28.5244, 77.2066),
        ),
        entry(
            "5",
            "Bangalore",
            "Manipal Hospital",
            Category::Private,
            "98, HAL Airport Road, Kodihalli, Bangalore, Karnataka 560017",
            Charges::Paid,
            650,
            [25, 20, 8, 6],
            (12.9572, 77.6497),
        ),
        entry(
            "6",
            "Bangalore",
            "Victoria Hospital",
            Category::Government,
            "Fort Mohalla, Krishnarajendra Market, Bangalore, Karnataka 560002",
            Charges::Regulated,
            1200,
            [35, 28, 15, 10],
            (12.9698, 77.5895),
        ),
        entry(
            "7",
            "Chennai",
            "Apollo Hospitals",
            Category::Private,
            "21, Greams Lane, Off Greams Road, Chennai, Tamil Nadu 600006",
            Charges::Paid,
            750,
            [30, 22, 12, 9],
            (13.0569, 80.2491),
        ),
        entry(
            "8",
            "Chennai",
            "Government General Hospital",
            Category::Government,
            "EVR Periyar Salai, Park Town, Chennai, Tamil Nadu 600003",
            Charges::Free,
            2000,
            [55, 40, 18, 12],
            (13.0843, 80.2809),
        ),
        entry(
            "9",
            "Kolkata",
            "AMRI Hospitals",
            Category::Private,
            "P-4 & 5, CIT Scheme LXXII, Gariahat Road, Dhakuria, Kolkata, West Bengal 700029",
            Charges::Paid,
            450,
            [8, 5, 3, 2],
            (22.5154, 88.3640),
        ),
        entry(
            "10",
            "Kolkata",
            "SSKM Hospital",
            Category::Government,
            "244, AJC Bose Road, Bhowanipore, Kolkata, West Bengal 700020",
            Charges::Free,
            1800,
            [0, 0, 0, 0],
            (22.5411, 88.3525),
        ),
        entry(
            "11",
            "Pune",
            "Ruby Hall Clinic",
            Category::Private,
            "40, Sassoon Road, Pune, Maharashtra 411001",
            Charges::Paid,
            550,
            [22, 18, 9, 6],
            (18.5196, 73.8553),
        ),
        entry(
            "12",
            "Pune",
            "Sassoon General Hospital",
            Category::Government,
            "Near Pune Railway Station, Pune, Maharashtra 411001",
            Charges::Free,
            1400,
            [38, 30, 14, 10],
            (18.5314, 73.8446),
        ),
        entry(
            "13",
            "Hyderabad",
            "Care Hospitals",
            Category::Private,
            "Road No. 1, Banjara Hills, Hyderabad, Telangana 500034",
            Charges::Paid,
            500,
            [15, 12, 7, 5],
            (17.4239, 78.4738),
        ),
        entry(
            "14",
            "Hyderabad",
            "Osmania General Hospital",
            Category::Government,
            "Afzal Gunj, Hyderabad, Telangana 500012",
            Charges::Free,
            2200,
            [48, 35, 16, 11],
            (17.3753, 78.4815),
        ),
        entry(
            "15",
            "Ahmedabad",
            "Sterling Hospital",
            Category::Private,
            "Off Gurukul Road, Behind Drive-In Cinema, Ahmedabad, Gujarat 380052",
            Charges::Paid,
            400,
            [10, 8, 4, 3],
            (23.0395, 72.5204),
        ),
        entry(
            "16",
            "Ahmedabad",
            "Civil Hospital",
            Category::Government,
            "Asarwa, Ahmedabad, Gujarat 380016",
            Charges::Free,
            1600,
            [42, 33, 15, 10],
            (23.0395, 72.5958),
        ),
        entry(
            "17",
            "Jaipur",
            "Fortis Escorts Hospital",
            Category::Private,
            "Jawahar Lal Nehru Marg, Malviya Nagar, Jaipur, Rajasthan 302017",
            Charges::Paid,
            350,
            [12, 9, 5, 4],
            (26.8621, 75.8095),
        ),
        entry(
            "18",
            "Jaipur",
            "SMS Hospital",
            Category::Government,
            "JLN Marg, Jaipur, Rajasthan 302004",
            Charges::Free,
            2800,
            [60, 45, 20, 14],
            (26.9124, 75.7873),
        ),
        entry(
            "19",
            "Lucknow",
            "Sahara Hospital",
            Category::Private,
            "Viraj Khand, Gomti Nagar, Lucknow, Uttar Pradesh 226010",
            Charges::Paid,
            300,
            [8, 6, 3, 2],
            (26.8550, 80.9735),
        ),
        entry(
            "20",
            "Lucknow",
            "King George's Medical University",
            Category::Government,
            "Chowk, Lucknow, Uttar Pradesh 226003",
            Charges::Free,
            2400,
            [52, 38, 17, 12],
            (26.8621, 80.9429),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    district: &str,
    name: &str,
    category: Category,
    address: &str,
    charges: Charges,
    capacity: u32,
    vacancy: [u32; 4],
    (latitude, longitude): (f64, f64),
) -> HospitalRecord {
    let [isolation_without_oxygen, isolation_with_oxygen, icu_without_ventilator, icu_with_ventilator] =
        vacancy;
    HospitalRecord {
        id: id.to_string(),
        district: district.to_string(),
        name: name.to_string(),
        category,
        address: address.to_string(),
        charges,
        capacity,
        vacancy: Vacancy::new(
            isolation_without_oxygen,
            isolation_with_oxygen,
            icu_without_ventilator,
            icu_with_ventilator,
        ),
        latitude,
        longitude,
    }
}
