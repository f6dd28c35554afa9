use ft5206_rs::data_types::{EventFlag, PrimaryTouch, TouchRecord, TouchReport};

#[test]
fn primary_touch_decode() {
    let block = [0x01, 0x03, 0xAB, 0x00, 0xCD];
    let touch = PrimaryTouch::parse(&block).unwrap();
    assert_eq!(touch.x, 0x3AB);
    assert_eq!(touch.y, 0x0CD);
    assert_eq!(touch.event, EventFlag::PressDown);
}

#[test]
fn primary_touch_zero_count_is_none() {
    let block = [0x00, 0x03, 0xAB, 0x00, 0xCD];
    assert_eq!(PrimaryTouch::parse(&block), None);
}

#[test]
fn primary_touch_event_flag_from_x_high() {
    // Contact flag (0b10) in bits 7:6 of the X-high byte
    let block = [0x01, 0x83, 0xAB, 0x00, 0xCD];
    let touch = PrimaryTouch::parse(&block).unwrap();
    assert_eq!(touch.event, EventFlag::Contact);
    assert_eq!(touch.x, 0x3AB);
}

fn block_with(count: u8) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[2] = count;
    // slot 0 at offset 3
    block[3] = 0x01;
    block[4] = 0x10;
    block[5] = 0x12;
    block[6] = 0x34;
    // slot 1 at offset 9
    block[9] = 0x02;
    block[10] = 0x20;
    block[11] = 0x25;
    block[12] = 0x67;
    block
}

#[test]
fn touch_report_decodes_two_slots() {
    let report = TouchReport::parse(&block_with(2)).unwrap();
    assert_eq!(report.count(), 2);
    assert_eq!(
        report.point(0),
        Some(TouchRecord {
            x: 0x110,
            y: 0x234,
            id: 1,
        })
    );
    assert_eq!(
        report.point(1),
        Some(TouchRecord {
            x: 0x220,
            y: 0x567,
            id: 2,
        })
    );
}

#[test]
fn touch_report_single_touch_leaves_second_slot_empty() {
    let report = TouchReport::parse(&block_with(1)).unwrap();
    assert_eq!(report.count(), 1);
    assert!(report.point(0).is_some());
    assert_eq!(report.point(1), None);
    assert_eq!(report.point(2), None);
}

#[test]
fn touch_report_invalid_counts_are_none() {
    assert_eq!(TouchReport::parse(&block_with(0)), None);
    assert_eq!(TouchReport::parse(&block_with(3)), None);
    assert_eq!(TouchReport::parse(&block_with(0xFF)), None);
}
