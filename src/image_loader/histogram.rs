//! Per-channel intensity histograms over the full 8-bit range.

use crate::errors::{Result, ViewerError};
use image::DynamicImage;

pub const DEFAULT_BUCKETS: usize = 50;
const VALUE_RANGE: usize = 256;

/// Read-only view of an interleaved 8-bit pixel buffer.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    pub data: &'a [u8],
}

impl<'a> PixelView<'a> {
    pub fn new(width: u32, height: u32, channels: usize, data: &'a [u8]) -> Result<Self> {
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(ViewerError::InvalidPixelBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Borrow the bytes of an 8-bit grayscale or RGB image.
    pub fn from_image(image: &'a DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageLuma8(buf) => Self::new(buf.width(), buf.height(), 1, buf.as_raw()),
            DynamicImage::ImageRgb8(buf) => Self::new(buf.width(), buf.height(), 3, buf.as_raw()),
            other => Err(ViewerError::UnsupportedChannelLayout {
                channels: other.color().channel_count() as usize,
            }),
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistogramChannel {
    Gray,
    Red,
    Green,
    Blue,
}

impl HistogramChannel {
    pub fn label(&self) -> &'static str {
        match self {
            HistogramChannel::Gray => "Grayscale",
            HistogramChannel::Red => "Red",
            HistogramChannel::Green => "Green",
            HistogramChannel::Blue => "Blue",
        }
    }

    fn layout(channels: usize) -> Result<&'static [HistogramChannel]> {
        match channels {
            1 => Ok(&[HistogramChannel::Gray]),
            3 => Ok(&[HistogramChannel::Red, HistogramChannel::Green, HistogramChannel::Blue]),
            n => Err(ViewerError::UnsupportedChannelLayout { channels: n }),
        }
    }
}

/// Half-open value interval `[start, end)` covered by one bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketRange {
    pub start: f32,
    pub end: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub range: BucketRange,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistogram {
    pub channel: HistogramChannel,
    pub counts: Vec<u64>,
}

impl ChannelHistogram {
    pub fn label(&self) -> &'static str {
        self.channel.label()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        let n = self.counts.len();
        self.counts.iter().enumerate().map(move |(i, &count)| Bucket {
            range: bucket_range(i, n),
            count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramResult {
    pub bucket_count: usize,
    pub channels: Vec<ChannelHistogram>,
}

impl HistogramResult {
    /// Largest single bucket across every channel, used to scale the chart
    pub fn max_count(&self) -> u64 {
        self.channels
            .iter()
            .flat_map(|c| c.counts.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

pub fn bucket_index(value: u8, bucket_count: usize) -> usize {
    (value as usize * bucket_count / VALUE_RANGE).min(bucket_count - 1)
}

pub fn bucket_range(index: usize, bucket_count: usize) -> BucketRange {
    let width = VALUE_RANGE as f32 / bucket_count as f32;
    BucketRange {
        start: index as f32 * width,
        end: (index + 1) as f32 * width,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBuilder {
    bucket_count: usize,
}

impl Default for HistogramBuilder {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKETS,
        }
    }
}

impl HistogramBuilder {
    /// Bucket count is clamped to `1..=256`.
    pub fn new(bucket_count: usize) -> Self {
        Self {
            bucket_count: bucket_count.clamp(1, VALUE_RANGE),
        }
    }

    pub fn build(&self, pixels: &PixelView<'_>) -> Result<HistogramResult> {
        let layout = HistogramChannel::layout(pixels.channels)?;
        let stride = pixels.channels;

        // Map every byte value once instead of dividing per pixel
        let mut lut = [0usize; VALUE_RANGE];
        for (value, slot) in lut.iter_mut().enumerate() {
            *slot = bucket_index(value as u8, self.bucket_count);
        }

        tracing::trace!(
            pixels = pixels.pixel_count(),
            channels = stride,
            buckets = self.bucket_count,
            "building histogram"
        );

        let channels = layout
            .iter()
            .enumerate()
            .map(|(offset, &channel)| {
                let mut counts = vec![0u64; self.bucket_count];
                for &value in pixels.data.iter().skip(offset).step_by(stride) {
                    counts[lut[value as usize]] += 1;
                }
                ChannelHistogram { channel, counts }
            })
            .collect();

        Ok(HistogramResult {
            bucket_count: self.bucket_count,
            channels,
        })
    }

    pub fn build_image(&self, image: &DynamicImage) -> Result<HistogramResult> {
        self.build(&PixelView::from_image(image)?)
    }
}
