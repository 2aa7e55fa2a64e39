//! Entry forms on the staff dashboards. Nothing is persisted: a valid
//! submission is acknowledged and the form resets.

use dioxus::prelude::*;
use shared_types::StatIcon;
use shared_ui::{Input, Textarea};

use super::{use_acknowledger, PanelCard};
use crate::acknowledgments::{AckAction, AckLedger};
use crate::notify::Notice;

/// Labels of the required fields left blank, in form order.
pub(crate) fn missing_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect()
}

fn missing_message(missing: &[&str]) -> Option<String> {
    if missing.is_empty() {
        None
    } else {
        Some(format!("Required: {}.", missing.join(", ")))
    }
}

#[component]
fn SubmitRow(label: String) -> Element {
    rsx! {
        div { class: "panel-row-actions",
            button {
                class: "button",
                "data-style": "primary",
                "data-size": "sm",
                r#type: "submit",
                "{label}"
            }
        }
    }
}

#[component]
pub(crate) fn AttendanceForm() -> Element {
    let ack = use_acknowledger();
    let mut class_name = use_signal(|| "10-A".to_string());
    let mut date = use_signal(String::new);
    let mut absentees = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut submissions = use_signal(|| 0u32);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let missing = missing_fields(&[("Date", date.read().as_str())]);
        if let Some(message) = missing_message(&missing) {
            error_msg.set(Some(message));
            return;
        }
        error_msg.set(None);
        submissions += 1;
        let key = AckLedger::key("attendance", format!("{}:{}", class_name.read(), submissions()));
        ack.record(key, AckAction::Submitted, Notice::submitted("Attendance"));
        date.set(String::new());
        absentees.set(String::new());
    };

    rsx! {
        PanelCard {
            title: "Mark Attendance",
            icon: StatIcon::UserCheck,
            description: "Record today's attendance for a class",
            form { class: "panel-form", onsubmit: handle_submit,
                if let Some(err) = &*error_msg.read() {
                    div { class: "error-message", "{err}" }
                }
                div { class: "form-row",
                    div { class: "input-wrapper",
                        label { class: "input-label", r#for: "attendance-class", "Class" }
                        select {
                            id: "attendance-class",
                            class: "input",
                            value: "{class_name}",
                            onchange: move |evt: Event<FormData>| class_name.set(evt.value()),
                            option { value: "10-A", "Class 10-A" }
                            option { value: "9-B", "Class 9-B" }
                            option { value: "8-A", "Class 8-A" }
                        }
                    }
                    Input {
                        id: "attendance-date",
                        label: "Date",
                        input_type: "date",
                        value: date.read().clone(),
                        on_input: move |evt: FormEvent| date.set(evt.value()),
                    }
                }
                Textarea {
                    id: "attendance-absentees",
                    label: "Absent students",
                    value: absentees.read().clone(),
                    on_input: move |evt: FormEvent| absentees.set(evt.value()),
                    placeholder: "Roll numbers, comma separated",
                    rows: 2,
                }
                SubmitRow { label: "Save Attendance" }
            }
        }
    }
}

#[component]
pub(crate) fn MaterialUploadForm() -> Element {
    let ack = use_acknowledger();
    let mut title = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let missing = missing_fields(&[
            ("Title", title.read().as_str()),
            ("Subject", subject.read().as_str()),
        ]);
        if let Some(message) = missing_message(&missing) {
            error_msg.set(Some(message));
            return;
        }
        error_msg.set(None);
        let key = AckLedger::key("upload", title.read().trim());
        ack.record(key, AckAction::Submitted, Notice::submitted("Study Material"));
        title.set(String::new());
        subject.set(String::new());
        notes.set(String::new());
    };

    rsx! {
        PanelCard {
            title: "Upload Materials",
            icon: StatIcon::FileText,
            description: "Share notes and worksheets with your classes",
            form { class: "panel-form", onsubmit: handle_submit,
                if let Some(err) = &*error_msg.read() {
                    div { class: "error-message", "{err}" }
                }
                Input {
                    id: "material-title",
                    label: "Title",
                    value: title.read().clone(),
                    on_input: move |evt: FormEvent| title.set(evt.value()),
                    placeholder: "e.g., Chapter 6: Quadratic Equations",
                }
                Input {
                    id: "material-subject",
                    label: "Subject",
                    value: subject.read().clone(),
                    on_input: move |evt: FormEvent| subject.set(evt.value()),
                    placeholder: "Mathematics",
                }
                Textarea {
                    id: "material-notes",
                    label: "Description",
                    value: notes.read().clone(),
                    on_input: move |evt: FormEvent| notes.set(evt.value()),
                }
                SubmitRow { label: "Upload" }
            }
        }
    }
}

#[component]
pub(crate) fn RoomAllocationForm() -> Element {
    let ack = use_acknowledger();
    let mut student = use_signal(String::new);
    let mut room = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let missing = missing_fields(&[
            ("Student", student.read().as_str()),
            ("Room", room.read().as_str()),
        ]);
        if let Some(message) = missing_message(&missing) {
            error_msg.set(Some(message));
            return;
        }
        error_msg.set(None);
        let key = AckLedger::key("allocation", room.read().trim());
        ack.record(key, AckAction::Submitted, Notice::submitted("Room Allocation"));
        student.set(String::new());
        room.set(String::new());
    };

    rsx! {
        PanelCard {
            title: "Room Allocation",
            icon: StatIcon::Building,
            description: "Assign a student to a room",
            form { class: "panel-form", onsubmit: handle_submit,
                if let Some(err) = &*error_msg.read() {
                    div { class: "error-message", "{err}" }
                }
                Input {
                    id: "allocation-student",
                    label: "Student",
                    value: student.read().clone(),
                    on_input: move |evt: FormEvent| student.set(evt.value()),
                    placeholder: "Student name or ID",
                }
                Input {
                    id: "allocation-room",
                    label: "Room",
                    value: room.read().clone(),
                    on_input: move |evt: FormEvent| room.set(evt.value()),
                    placeholder: "e.g., A-205",
                }
                SubmitRow { label: "Allocate Room" }
            }
        }
    }
}

#[component]
pub(crate) fn IssueReportForm() -> Element {
    let ack = use_acknowledger();
    let mut room = use_signal(String::new);
    let mut priority = use_signal(|| "medium".to_string());
    let mut details = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let missing = missing_fields(&[
            ("Room", room.read().as_str()),
            ("Details", details.read().as_str()),
        ]);
        if let Some(message) = missing_message(&missing) {
            error_msg.set(Some(message));
            return;
        }
        error_msg.set(None);
        let key = AckLedger::key("issue", format!("{}:{}", room.read().trim(), priority.read()));
        ack.record(key, AckAction::Submitted, Notice::submitted("Issue Report"));
        room.set(String::new());
        details.set(String::new());
    };

    rsx! {
        PanelCard {
            title: "Report Issue",
            icon: StatIcon::Alert,
            description: "Log a maintenance problem",
            form { class: "panel-form", onsubmit: handle_submit,
                if let Some(err) = &*error_msg.read() {
                    div { class: "error-message", "{err}" }
                }
                div { class: "form-row",
                    Input {
                        id: "issue-room",
                        label: "Room",
                        value: room.read().clone(),
                        on_input: move |evt: FormEvent| room.set(evt.value()),
                        placeholder: "e.g., B-102",
                    }
                    div { class: "input-wrapper",
                        label { class: "input-label", r#for: "issue-priority", "Priority" }
                        select {
                            id: "issue-priority",
                            class: "input",
                            value: "{priority}",
                            onchange: move |evt: Event<FormData>| priority.set(evt.value()),
                            option { value: "high", "High" }
                            option { value: "medium", "Medium" }
                            option { value: "low", "Low" }
                        }
                    }
                }
                Textarea {
                    id: "issue-details",
                    label: "Details",
                    value: details.read().clone(),
                    on_input: move |evt: FormEvent| details.set(evt.value()),
                    placeholder: "Describe the problem",
                }
                SubmitRow { label: "Submit Report" }
            }
        }
    }
}
