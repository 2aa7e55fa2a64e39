use shared_types::{
    FacultyTask, LeaveRequest, LeaveStatus, Priority, Profile, Role, ScheduleEntry, StatColor,
    StatDescriptor, StatIcon, TaughtClass,
};

use crate::routes::dashboard::{welcome_heading, DashboardConfig, Panel};

pub fn classes() -> Vec<TaughtClass> {
    [("Class 10", "A", 45), ("Class 9", "B", 42), ("Class 8", "A", 38)]
        .into_iter()
        .map(|(class_name, section, students)| TaughtClass {
            class_name: class_name.into(),
            section: section.into(),
            subject: "Mathematics".into(),
            students,
        })
        .collect()
}

pub fn schedule() -> Vec<ScheduleEntry> {
    [
        (1, "10-A", "09:00 - 09:45"),
        (3, "9-B", "10:45 - 11:30"),
        (5, "8-A", "12:15 - 01:00"),
    ]
    .into_iter()
    .map(|(period, class, time)| ScheduleEntry {
        period,
        subject: "Mathematics".into(),
        detail: class.into(),
        time: time.into(),
        room: None,
    })
    .collect()
}

pub fn tasks() -> Vec<FacultyTask> {
    [
        (1, "Grade Class 10-A Mid-term papers", "2024-02-20", Priority::High),
        (2, "Upload study materials for Class 9-B", "2024-02-18", Priority::Medium),
        (3, "Approve leave requests", "2024-02-16", Priority::Low),
    ]
    .into_iter()
    .map(|(id, task, deadline, priority)| FacultyTask {
        id,
        task: task.into(),
        deadline: deadline.into(),
        priority,
    })
    .collect()
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    [
        (1, "Priya Sharma", "10-A", "Medical", "Feb 15-16"),
        (2, "Rahul Singh", "9-B", "Family function", "Feb 18"),
    ]
    .into_iter()
    .map(|(id, student, class, reason, dates)| LeaveRequest {
        id,
        student: student.into(),
        placement: class.into(),
        reason: reason.into(),
        dates: dates.into(),
        status: LeaveStatus::Pending,
        contact: None,
        requested_on: None,
    })
    .collect()
}

pub fn config(profile: Option<&Profile>) -> DashboardConfig {
    let classes = classes();
    let tasks = tasks();
    let leaves = leave_requests();
    let students: u32 = classes.iter().map(|c| c.students).sum();

    let stats = vec![
        StatDescriptor::new("Total Students", students, StatIcon::Users).description("Across all classes"),
        StatDescriptor::new("Classes", classes.len(), StatIcon::BookOpen).description("Assigned this term"),
        StatDescriptor::new("Pending Tasks", tasks.len(), StatIcon::Clipboard)
            .description("Need attention")
            .color(StatColor::Warning),
        StatDescriptor::new("Leave Requests", leaves.len(), StatIcon::UserCheck)
            .description("Awaiting approval")
            .color(StatColor::pick(leaves.is_empty(), StatColor::Success, StatColor::Warning)),
    ];

    DashboardConfig {
        role: Role::Faculty,
        header_title: "Faculty Portal",
        welcome: welcome_heading("Welcome", profile, Role::Faculty),
        subtitle: "Manage your classes and students".into(),
        stats,
        sidebar: None,
        panels: vec![
            Panel::Timetable {
                entries: schedule(),
                detail_label: "Class",
            },
            Panel::Classes(classes),
            Panel::Tasks(tasks),
            Panel::LeaveApprovals {
                title: "Leave Requests",
                requests: leaves,
            },
            Panel::AttendanceForm,
            Panel::MaterialUpload,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn student_total_sums_class_rolls() {
        let config = config(None);
        assert_eq!(config.stats[0].value, "125");
        assert_eq!(config.stats[1].value, "3");
        assert_eq!(config.welcome, "Welcome, Professor!");
    }

    #[test]
    fn schedule_periods_are_ascending() {
        let periods: Vec<u8> = schedule().iter().map(|e| e.period).collect();
        let mut sorted = periods.clone();
        sorted.sort_unstable();
        assert_eq!(periods, sorted);
    }

    #[test]
    fn leave_ids_are_unique() {
        let requests = leave_requests();
        let mut ids: Vec<u32> = requests.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), requests.len());
    }
}
