use crate::image_classifier::engine::interface::InferenceEngine;
use crate::image_classifier::error::{InferenceError, ModelLoadError};
use crate::image_classifier::model_config::InputShape;
use crate::library::logger::interface::Logger;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

pub struct InferenceEngineTract {
    plan: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_shape: InputShape,
    output_len: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceEngineTract {
    pub fn load(
        model_path: &Path,
        input_shape: InputShape,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let logger = logger.with_namespace("tract");
        let started = Instant::now();

        let io_error = |source| ModelLoadError::Io {
            path: model_path.to_path_buf(),
            source,
        };
        let format_error = |e: TractError| ModelLoadError::Format {
            path: model_path.to_path_buf(),
            reason: format!("{:#}", e),
        };

        let file = File::open(model_path).map_err(io_error)?;
        if file.metadata().map_err(io_error)?.len() == 0 {
            return Err(ModelLoadError::Empty {
                path: model_path.to_path_buf(),
            });
        }

        // SAFETY: the model is a read-only asset and is only read while mapped.
        let mmap = unsafe { Mmap::map(&file) }.map_err(io_error)?;
        let mut bytes: &[u8] = &mmap;

        let plan = tract_onnx::onnx()
            .model_for_read(&mut bytes)
            .and_then(|model| model.with_input_fact(0, f32::fact(input_shape.dims()).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(format_error)?;

        // Tract copies the weights into its own tensors, so the mapping can go.
        drop(mmap);

        let output_len = plan
            .model()
            .output_fact(0)
            .map_err(format_error)?
            .shape
            .as_concrete()
            .map(|dims| dims.iter().product::<usize>())
            .ok_or(ModelLoadError::UnknownOutputShape)?;

        let _ = logger.info(&format!(
            "Loaded {} in {:?} (input {:?}, {} outputs)",
            model_path.display(),
            started.elapsed(),
            input_shape.dims(),
            output_len
        ));

        Ok(Self {
            plan,
            input_shape,
            output_len,
            logger,
        })
    }
}

impl InferenceEngine for InferenceEngineTract {
    fn input_shape(&self) -> InputShape {
        self.input_shape
    }

    fn output_len(&self) -> usize {
        self.output_len
    }

    fn run(&mut self, input: &[f32]) -> Result<Vec<f32>, InferenceError> {
        let expected = self.input_shape.len();
        if input.len() != expected {
            return Err(InferenceError::InputShape {
                expected,
                actual: input.len(),
            });
        }

        let engine_error = |e: TractError| InferenceError::Engine(format!("{:#}", e));

        let tensor = Tensor::from_shape(&self.input_shape.dims(), input).map_err(engine_error)?;
        let outputs = self
            .plan
            .run(tvec!(tensor.into_tvalue()))
            .map_err(engine_error)?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::Engine("model produced no outputs".to_string()))?;
        let scores = output.as_slice::<f32>().map_err(engine_error)?.to_vec();

        if scores.len() != self.output_len {
            let _ = self.logger.error(&format!(
                "Expected {} scores, got shape {:?}",
                self.output_len,
                output.shape()
            ));
            return Err(InferenceError::OutputShape {
                expected: self.output_len,
                actual: scores.len(),
            });
        }

        Ok(scores)
    }
}
