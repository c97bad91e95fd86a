#![no_main]

use libfuzzer_sys::fuzz_target;
use ringbuffer::RingBuffer;

// First byte picks the capacity, the rest is an opcode stream.
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let Ok(mut buf) = RingBuffer::<u8>::new(first as usize % 32 + 1) else {
        return;
    };

    for chunk in rest.chunks(2) {
        let op = chunk[0];
        let arg = chunk.get(1).copied().unwrap_or(0);
        match op % 5 {
            0 => buf.write(arg),
            1 => {
                let batch: Vec<u8> = (0..arg % 40).collect();
                let _ = buf.write_many(batch);
            }
            2 => {
                let _ = buf.read();
            }
            3 => {
                if let Ok(resized) = buf.resize(arg as usize % 40) {
                    assert_eq!(resized.read(), buf.read());
                    buf = resized;
                }
            }
            _ => buf.reset(),
        }

        let status = buf.status();
        assert!(status.len <= status.capacity);
        assert!(status.write_index < status.capacity);
        assert_eq!(buf.read().len(), status.len);
    }
});
