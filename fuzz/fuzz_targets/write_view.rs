#![no_main]

use buffer::{BigEndian, Endian, LittleEndian, ReadView, WriteView};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&len, ops)) = data.split_first() else {
        return;
    };
    let mut out = vec![0u8; usize::from(len)];
    let mut view = WriteView::new(&mut out);

    for (idx, &op) in ops.iter().take(1024).enumerate() {
        let value = u64::from(op).wrapping_mul(idx as u64 + 1);
        match op % 5 {
            0 => {
                let _ = view.try_write(op);
            }
            1 => {
                let _ = view.try_write((BigEndian(value as u16), LittleEndian(value)));
            }
            2 => {
                let _ = view.try_write_endian(value as u32, Endian::Little);
            }
            3 => {
                let _ = view.try_write_range(&[BigEndian(value as i16); 3]);
            }
            _ => {
                let _ = view.try_seek(usize::from(op));
            }
        }
        assert!(view.position() <= view.len());
    }

    // Whatever was written must read back without panicking.
    let written = view.position();
    let mut reader = ReadView::new(&out[..written]);
    while reader.try_read::<u8>().is_ok() {}
    assert!(reader.is_empty());
});
