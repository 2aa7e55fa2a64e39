use shared_types::{
    BlockOccupancy, Complaint, ComplaintStatus, HostelSummary, LeaveRequest, LeaveStatus,
    Priority, Profile, Role, StatColor, StatDescriptor, StatIcon,
};

use crate::routes::dashboard::{welcome_heading, DashboardConfig, Panel};

pub fn summary() -> HostelSummary {
    HostelSummary {
        total_rooms: 120,
        occupied_rooms: 98,
        available_rooms: 22,
        total_students: 196,
        occupancy_rate: 81.7,
    }
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    [
        (1, "Arjun Patel", "A-204", "Home visit", "Feb 16-18", "2024-02-14", "+91-98765-43210"),
        (2, "Priya Singh", "B-102", "Medical appointment", "Feb 17", "2024-02-15", "+91-98765-43211"),
        (3, "Rohit Kumar", "A-315", "Family function", "Feb 20-22", "2024-02-14", "+91-98765-43212"),
    ]
    .into_iter()
    .map(|(id, student, room, reason, dates, requested, contact)| LeaveRequest {
        id,
        student: student.into(),
        placement: room.into(),
        reason: reason.into(),
        dates: dates.into(),
        status: LeaveStatus::Pending,
        contact: Some(contact.into()),
        requested_on: Some(requested.into()),
    })
    .collect()
}

pub fn complaints() -> Vec<Complaint> {
    [
        (1, "Anita Sharma", "B-205", "Water supply issue", Priority::High, ComplaintStatus::Pending, "2024-02-15"),
        (2, "Vikram Raj", "A-108", "Electricity problem", Priority::Medium, ComplaintStatus::InProgress, "2024-02-14"),
        (3, "Deepak Singh", "C-301", "Room cleaning request", Priority::Low, ComplaintStatus::Pending, "2024-02-13"),
    ]
    .into_iter()
    .map(|(id, student, room, issue, priority, status, reported)| Complaint {
        id,
        student: student.into(),
        room: room.into(),
        issue: issue.into(),
        priority,
        status,
        reported_on: reported.into(),
    })
    .collect()
}

pub fn blocks() -> Vec<BlockOccupancy> {
    [("Block A", 38, 95), ("Block B", 32, 80), ("Block C", 28, 70)]
        .into_iter()
        .map(|(block, occupied, rate)| BlockOccupancy {
            block: block.into(),
            occupied,
            total: 40,
            rate,
        })
        .collect()
}

pub fn config(profile: Option<&Profile>) -> DashboardConfig {
    let summary = summary();
    let leaves = leave_requests();
    let complaints = complaints();
    let open_complaints = complaints
        .iter()
        .filter(|c| c.status != ComplaintStatus::Resolved)
        .count();

    let stats = vec![
        StatDescriptor::new("Total Students", summary.total_students, StatIcon::Users)
            .description("Residing in hostel"),
        StatDescriptor::new("Occupied Rooms", summary.occupied_rooms, StatIcon::Building)
            .description(format!("{}% occupancy", summary.occupancy_rate))
            .color(StatColor::Success),
        StatDescriptor::new("Leave Requests", leaves.len(), StatIcon::Calendar)
            .description("Pending approval")
            .color(StatColor::Warning),
        StatDescriptor::new("Active Complaints", open_complaints, StatIcon::Alert)
            .description("Need attention")
            .color(StatColor::pick(open_complaints == 0, StatColor::Success, StatColor::Destructive)),
    ];

    DashboardConfig {
        role: Role::Warden,
        header_title: "Warden Portal",
        welcome: welcome_heading("Welcome", profile, Role::Warden),
        subtitle: "Manage hostel operations and student welfare".into(),
        stats,
        sidebar: None,
        panels: vec![
            Panel::Occupancy(blocks()),
            Panel::LeaveApprovals {
                title: "Pending Leave Requests",
                requests: leaves,
            },
            Panel::Complaints(complaints),
            Panel::RoomAllocation,
            Panel::IssueReport,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn room_counts_add_up() {
        let s = summary();
        assert_eq!(s.occupied_rooms + s.available_rooms, s.total_rooms);
        let rate = f64::from(s.occupied_rooms) * 100.0 / f64::from(s.total_rooms);
        assert!((rate - s.occupancy_rate).abs() < 0.1);
    }

    #[test]
    fn block_rates_match_counts() {
        for block in blocks() {
            assert_eq!(block.occupied * 100 / block.total, block.rate, "{}", block.block);
        }
    }

    #[test]
    fn stats_count_open_items() {
        let config = config(None);
        let values: Vec<&str> = config.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["196", "98", "3", "3"]);
    }
}
