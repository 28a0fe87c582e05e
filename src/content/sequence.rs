use crate::models::Block::{self, Bullet, Check, Rule, Spacer, Step, Text, Warning};

use super::{
    BRAKER3_PERL_MODULES, FALCO, FALCO_TRIMMED, FASTP, GENOME_ESTIMATE, GZIP, LONGSTITCH,
};

pub(super) static BLOCKS: &[Block] = &[
    // 1
    Step("1. code as the substituted cbr15 user (avoid working in the root as it will damage the OS)"),
    Check("change from the root user to the cbr15 user"),
    Block::bash("su cbr15"),
    Block::bash("cd ~"),
    Block::bash("export CONDA_PREFIX='/media/Raid/Home/anaconda3'"),
    Block::bash("export PATH='/media/Raid/Home/anaconda3/bin:$PATH'"),
    Block::bash("conda activate base"),
    Spacer,
    // 2
    Step("2. Download the raw sequencing data of CPB from NCBI SRA database"),
    Check("install the sra-toolkit within the NGSWee environment"),
    Block::bash("sudo apt -y install sra-toolkit"),
    Check("prefetch all the 15 .sra files by using the prefetch tool available in the sra-toolkit"),
    Block::bash("prefetch SRR11266556 SRR11266555 SRR11266554 SRR9038729 SRR9038731 SRR9038733 SRR9038730 SRR9038732 SRR9038734 SRR9690969 SRR9690970 SRR9690971 SRR9690972 SRR9690973 SRR9690974"),
    Check("convert all the 15 files extension one by one from .sra to .fastq format"),
    Block::bash("fasterq-dump SRR11266556 SRR11266555 SRR11266554 SRR9038729 SRR9038731 SRR9038733 SRR9038730 SRR9038732 SRR9038734 SRR9690969 SRR9690970 SRR9690971 SRR9690972 SRR9690973 SRR9690974"),
    Check("zip the two large .fastq files (paired-end sequencing data) for each sample into one .gz file by using the gzip bash script"),
    Block::download("Download Gzip Bash Script", &GZIP),
    Spacer,
    // 3
    Step("3. Check the base quality of the 30 raw fastq files by using Falco"),
    Check("install Falco within Linux terminal"),
    Block::bash("conda install -c bioconda falco"),
    Check("check the base quality of all the .fastq.gz files one by one by using the falco bash script"),
    Block::download("Download Falco Bash Script", &FALCO),
    Spacer,
    // 4
    Step("4. Trim and clean the 30 raw reads using fastp"),
    Check("install fastp within Linux terminal"),
    Block::bash("sudo apt -y install fastp"),
    Check("remove low quality reads with Phred score < 30, remove short reads with length < 70bp, remove adapters & remove ambiguous bases (N) up to a maximum of 2 by using the fastp bash script"),
    Block::download("Download Fastp Bash Script", &FASTP),
    Spacer,
    // 5
    Step("5. Check the base quality of the 30 trimmed .fastq.gz files once again using falco"),
    Check("check the base quality of the trimmed files using the bash script"),
    Block::download("Download Falco Bash Script", &FALCO_TRIMMED),
    Spacer,
    // 6
    Step("6. Check the base quality of the two short illumina .fastq files provided by LKM by using Falco"),
    Block::bash("falco Conopomorpha_raw_1.fastq.gz"),
    Block::bash("falco Conopomorpha_raw_2.fastq.gz"),
    Spacer,
    // 7
    Step("7. Trim and clean the two short illumina .fastq files using fastp"),
    Block::bash("nohup fastp -i /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1.fastq.gz -I /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2.fastq.gz -o /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_1/trimmed_Conopomorpha_1.fastq.gz -O /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_2/trimmed_Conopomorpha_2.fastq.gz -n 2 -f 15 -q 20 -l 70 --correction --detect_adapter_for_pe --html /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/fastp_report.html --json /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/fastp_report.json > fastp_output.log 2>&1 &"),
    Block::bash("fastp -i /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1.fastq.gz -I /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2.fastq.gz -o /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/trimmed_Conopomorpha_1.fastq.gz -O /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/trimmed_Conopomorpha_2.fastq.gz -n 2 -f 15 -q 20 -l 150 --correction --detect_adapter_for_pe --html /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/fastp_report.html --json /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/fastp_report.json"),
    Block::bash("nohup fastp -i /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1.fastq.gz -I /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2.fastq.gz -o /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/trimmed_Conopomorpha_1.fastq.gz -O /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/trimmed_Conopomorpha_2.fastq.gz -n 2 -f 15 -q 20 -l 200 --correction --detect_adapter_for_pe --html /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/fastp_report.html --json /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results_stricter/fastp_report.json > fastp_output.log 2>&1 &"),
    Spacer,
    // 8
    Step("8. Check the base quality of the two short Illumina .fastq files using Falco once again"),
    Block::bash("falco trimmed_Conopomorpha_1.fastq.gz"),
    Block::bash("falco trimmed_Conopomorpha_2.fastq.gz"),
    Spacer,
    // 9
    Step("9. Alternatively, you can also trim the two short Illumina .fastq files using Cutadapt"),
    Block::bash("nohup cutadapt -a GATCGGAAGAGCACACGTCTGAACTCCAGTCACACAGTGATCTCGTATGC -q 20,20 -m 70 --max-n 2 -j 48 --poly-a --no-indels --trim-n --report full -o trimmed_Conopomorpha_1.fastq.gz -p trimmed_Conopomorpha_2.fastq.gz /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1.fastq.gz /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2.fastq.gz > cutadapt.log 2>&1 &"),
    Block::bash("nohup cutadapt -a GATCGGAAGAGCACACGTCTGAACTCCAGTCACACAGTGATCTCGTATGC -q 20,20 -m 150 --max-n 2 -j 48 --poly-a --no-indels --trim-n --report full -o trimmed_Conopomorpha_1.fastq.gz -p trimmed_Conopomorpha_2.fastq.gz /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1.fastq.gz /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2.fastq.gz > cutadapt.log 2>&1 &"),
    Spacer,
    // 10
    Step("10. Estimate the haploid genome size of the insect using jellyfish"),
    Check("perform k-mer counting"),
    Block::bash("nohup jellyfish count -m 19 -s 50G -t 48 -C /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_1/trimmed_Conopomorpha_1.fastq /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_2/trimmed_Conopomorpha_2.fastq -o k_19_mer_counts.jf > jellyfish_k19_output.log 2>&1 &"),
    Block::bash("nohup jellyfish count -m 21 -s 50G -t 48 -C /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_1/trimmed_Conopomorpha_1.fastq /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_2/trimmed_Conopomorpha_2.fastq -o k_21_mer_counts.jf > jellyfish_k21_output.log 2>&1 &"),
    Block::bash("nohup jellyfish count -m 22 -s 50G -t 48 -C /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_1/trimmed_Conopomorpha_1.fastq /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_2/trimmed_Conopomorpha_2.fastq -o k_22_mer_counts.jf > jellyfish_k22_output.log 2>&1 &"),
    Block::bash("nohup jellyfish count -m 27 -s 50G -t 48 -C /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_1/trimmed_Conopomorpha_1.fastq /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_2/trimmed_Conopomorpha_2.fastq -o k_27_mer_counts.jf > jellyfish_k27_output.log 2>&1 &"),
    Block::bash("nohup jellyfish count -m 31 -s 50G -t 48 -C /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_1/trimmed_Conopomorpha_1.fastq /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_2/trimmed_Conopomorpha_2.fastq -o k_31_mer_counts.jf > jellyfish_k31_output.log 2>&1 &"),
    Check("generate a k-mer frequency histogram"),
    Block::bash("jellyfish histo k_19_mer_counts.jf > k_19_mer_counts.histo"),
    Block::bash("jellyfish histo k_21_mer_counts.jf > k_21_mer_counts.histo"),
    Block::bash("jellyfish histo k_22_mer_counts.jf > k_22_mer_counts.histo"),
    Block::bash("jellyfish histo k_27_mer_counts.jf > k_27_mer_counts.histo"),
    Block::bash("jellyfish histo k_31_mer_counts.jf > k_31_mer_counts.histo"),
    Check("estimate haploid genome size of the insect"),
    Block::bash("python3 genome_estimate.py"),
    Block::download("Download GenomeEstimate Python Script", &GENOME_ESTIMATE),
    Spacer,
    // 11
    Step("11. Check & compare the quality of the raw & processed LKM PacBio read using NanoPlot"),
    Block::bash("nohup NanoPlot -t 48 --fastq /media/Raid/Wee/WeeYeZhi/resources_from_LKM/pacbio_long_read/PacBio.fq.gz --info_in_report --plots dot kde --legacy hex -o nanoplot_processed_pacbio_read > nanoplot.log 2>&1 &"),
    Block::bash("nohup NanoPlot -t 48 --fastq /media/Raid/Wee/WeeYeZhi/processed_pacbio/proovread/proovread/siamaera_output_2.fq --info_in_report --plots dot kde --legacy hex -o nanoplot_processed_pacbio_read > nanoplot.log 2>&1 &"),
    Block::link("Visit NanoPlot Github Documentation", "https://github.com/wdecoster/NanoPlot?tab=readme-ov-file"),
    Block::link("Read & Cite NanoPlot Publication", "https://doi.org/10.1093/bioinformatics/btad311"),
    Spacer,
    // 12
    Text("12. If the quality of the PacBio read is bad, then proovread 2.14.1 will be used to correct the PacBio read using the short Illumina read"),
    Block::bash("conda create -n proovread"),
    Block::bash("conda activate proovread"),
    Block::bash("git clone https://github.com/BioInf-Wuerzburg/proovread"),
    Block::bash("cd proovread"),
    Block::bash("make"),
    Block::bash("sudo apt-get install liblog-log4perl-perl"),
    Block::bash("sudo apt-get install libfile-which-perl"),
    Block::bash("./bin/proovread --help"),
    Block::bash("nohup ./bin/proovread -t 48 -s /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1/trimmed_Conopomorpha_raw_1.fastq -s /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2/trimmed_Conopomorpha_raw_2.fastq -l /media/Raid/Wee/WeeYeZhi/resources_from_LKM/pacbio_long_read/PacBio.fq -o corrected_PacBio.fq > proovread.log 2>&1 &"),
    Block::bash("perl -I /media/Raid/Wee/WeeYeZhi/processed_pacbio/proovread/lib ./bin/SeqFilter --defaults"),
    Block::bash("perl ./bin/siamaera --help"),
    Block::bash("nohup perl ./bin/SeqFilter --in proovread/proovread.untrimmed.fq --min-length 200 --substr proovread/proovread.chim.tsv --out proovread/seqfilter_output.fq > proovread/seqfilter_output.log 2>&1 &"),
    Block::plain("nohup /usr/bin/env perl ./bin/siamaera < proovread/seqfilter_output.fq > proovread/siamaera_output.fq 2> proovread/siamaera_output.log &"),
    Block::link("Visit proovread GitHub Page", "https://github.com/BioInf-Wuerzburg/proovread/blob/master/README.org"),
    Block::link("Visit proovread GitHub Poster", "https://github.com/BioInf-Wuerzburg/proovread/blob/master/media/proovread-poster.pdf"),
    Block::link("Visit proovread Publication", "https://doi.org/10.1093/bioinformatics/btu392"),
    Block::link("Visit bwa Publication", "https://doi.org/10.1093/bioinformatics/bts280"),
    Block::link("Visit BLASR Publication", "https://bmcbioinformatics.biomedcentral.com/articles/10.1186/1471-2105-13-238"),
    Block::link("Visit SHRiMP Publication", "https://doi.org/10.1371/journal.pcbi.1000386"),
    Spacer,
    // 13
    Step("13. Perform genome assembly to construct a complete reference genome of CPB using SPAdes (assemble short reads and long reads together)"),
    Check("create a virtual environment called SPAdes"),
    Block::bash("conda create -n SPAdes"),
    Check("activate the SPAdes environment"),
    Block::bash("conda activate SPAdes"),
    Check("install SPAdes within Linux terminal"),
    Block::bash("wget https://github.com/ablab/spades/releases/download/v4.0.0/SPAdes-4.0.0-Linux.tar.gz"),
    Block::bash("tar -xzf SPAdes-4.0.0-Linux.tar.gz"),
    Block::bash("cd SPAdes-4.0.0-Linux/bin/"),
    Block::bash("sudo apt -y install spades"),
    Check("test whether you've installed SPAdes successfully"),
    Block::bash("spades.py --version"),
    Check("display the list of command options of SPAdes"),
    Block::bash("spades.py -h"),
    Check("rename the .fna file to .fasta file"),
    Block::bash("mv GCA_012932125.1_ASM1293212v1_genomic.fna GCA_012932125.1_ASM1293212v1_genomic.fasta"),
    Check("run SPAdes to perform genome assembly of CPB step by step"),
    Text("Run the error correction step to generate the corrected reads"),
    Block::bash("nohup spades.py --only-error-correction --pe1-1 /home/cbr16/Documents/WeeYeZhi/resources_from_NCBI/all_R1.fastq.gz --pe1-2 /home/cbr16/Documents/WeeYeZhi/resources_from_NCBI/all_R2.fastq.gz --pe2-1 /home/cbr16/Documents/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1/trimmed_Conopomorpha_raw_1.fastq.gz --pe2-2 /home/cbr16/Documents/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2/trimmed_Conopomorpha_raw_2.fastq.gz --pacbio /home/cbr16/Documents/WeeYeZhi/resources_from_LKM/pacbio_long_read/PacBio.fq.gz -o /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/SPAdes_CPB_genome/error_correction --threads 8 > /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/SPAdes_CPB_genome/error_correction/error_correction.log 2>&1 &"),
    Text("Next, use the corrected reads to proceed with the assembly"),
    Block::bash("nohup spades.py --only-assembler --pe1-1 /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/error_correction/corrected/all_R1.fastq.00.0_0.cor.fastq.gz --pe1-2 /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/error_correction/corrected/all_R2.fastq.00.0_0.cor.fastq.gz --pe2-1 /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/error_correction/corrected/trimmed_Conopomorpha_raw_1.fastq.00.0_0.cor.fastq.gz --pe2-2 /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/error_correction/corrected/trimmed_Conopomorpha_raw_2.fastq.00.0_0.cor.fastq.gz --pacbio /home/cbr16/Documents/WeeYeZhi/resources_from_LKM/pacbio_long_read/PacBio.fq.gz --trusted-contigs /home/cbr16/Documents/WeeYeZhi/resources_from_LKM/hybrid_genome_assembly_of_CPB/CPB_insect_draft_assembly.v4.fa -o /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/assembly_output --threads 8 > /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/assembly_output.log 2>&1 &"),
    Text("Run the mismatch correction step"),
    Block::bash("nohup spades.py --only-mismatch-correction -o /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/assembly_output --threads 8 > /home/cbr16/Documents/WeeYeZhi/output/SPAdesresults/mismatch_correction.log 2>&1 &"),
    Text("Alternatively, if you have a strong HPC, you can directly run the code below to perform genome assembly all at once"),
    Text("set your working directory as /home/cbr16/Documents/WeeYeZhi/ and run SPAdes in this working directory"),
    Block::bash("nohup spades.py --pe1-1 /media/Raid/Wee/WeeYeZhi/concatenated_processed_RNA_seq/all_R1.fastq.gz --pe1-2 /media/Raid/Wee/WeeYeZhi/concatenated_processed_RNA_seq/all_R2.fastq.gz --pe2-1 /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1/trimmed_Conopomorpha_raw_1.fastq.gz --pe2-2 /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2/trimmed_Conopomorpha_raw_2.fastq.gz --pacbio /media/Raid/Wee/WeeYeZhi/resources_from_LKM/pacbio_long_read/PacBio.fq.gz --trusted-contigs /media/Raid/Wee/WeeYeZhi/resources_from_LKM/hybrid_genome_assembly_of_CPB/CPB_insect_draft_assembly.v4.fa -o /media/Raid/Wee/WeeYeZhi/output/SPAdesresults/SPAdes_CPB_genome/assembly_output --threads 48 --careful > /media/Raid/Wee/WeeYeZhi/output/SPAdesresults/SPAdes_CPB_genome/assembly_output/output.log 2>&1 &"),
    Block::link("Visit SPAdes GitHub Page", "https://github.com/ablab/spades/blob/v4.0.0/README.md"),
    Block::link("Visit SPAdes Assembly Toolkit", "https://ablab.github.io/spades/"),
    Block::link("Read SPAdes De Novo Assembler Publication", "https://doi.org/10.1002/cpbi.102"),
    Block::link("Read HybridSPAdes Publication", "https://doi.org/10.1093/bioinformatics/btv688"),
    Rule,
    Text("Run 3 iterations of the SPAdes pipeline with varying k-mer sizes, resulting in three different assembly versions 'v1.0', 'v1.1' and 'v1.2' (make 3 different assembly folders for 'v1.0', 'v1.1' and 'v1.2'"),
    Block::bash("nohup spades.py --pe1-1 /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1.fastq.gz --pe1-2 /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2.fastq.gz --pacbio /media/Raid/Wee/WeeYeZhi/resources_from_LKM/pacbio_long_read/PacBio.fq.gz -o /media/Raid/Wee/WeeYeZhi/output/SPAdesresults/SPAdes_hybrid_genome_assembly_k213355_1 --threads 32 --memory 400 --careful -k 21,33,55 &"),
    Block::bash("nohup spades.py --pe1-1 /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_1/trimmed_Conopomorpha_1.fastq.gz --pe1-2 /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_2/trimmed_Conopomorpha_2.fastq.gz --pacbio /media/Raid/Wee/WeeYeZhi/processed_pacbio/proovread/proovread/siamaera_output_2.fq -o /media/Raid/Wee/WeeYeZhi/output/SPAdesresults/SPAdes_hybrid_genome_assembly_k21335577 --threads 32 --memory 400 --careful -k 21,33,55,77 &"),
    Block::bash("nohup spades.py --pe1-1 /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_1/trimmed_Conopomorpha_1.fastq.gz --pe1-2 /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_fastp_2/trimmed_Conopomorpha_2.fastq.gz --pacbio /media/Raid/Wee/WeeYeZhi/processed_pacbio/proovread/proovread/siamaera_output_2.fq -o /media/Raid/Wee/WeeYeZhi/output/SPAdesresults/SPAdes_hybrid_genome_assembly_k127 --threads 32 --memory 400 --careful -k 127 &"),
    Warning("Just in case if spades crashes due to insufficient memory, you can resume the spades run by restarting the run from the last checkpoint/stage"),
    Block::bash("nohup spades.py -t 32 --memory 450 --restart-from last -o /media/Raid/Wee/WeeYeZhi/output/SPAdesresults/SPAdes_raw_hybrid_genome_assembly_k213355 > spades_continue.log 2>&1 &"),
    Rule,
    Step("Additional note"),
    Warning("SPAdes is a versatile toolkit designed for assembly and analysis of sequencing data. SPAdes is primarily developed for Illumina sequencing data, but can be used for IonTorrent as well. Most of SPAdes pipelines support hybrid mode, i.e. allow using long reads (PacBio and Oxford Nanopore) as a supplementary data."),
    Warning("Only files with extension .fq, .fastq, .bam, .fa, .fasta, .fq.gz, .fastq.gz, .bam.gz, .fa.gz, .fasta.gz are supported by SPAdes"),
    Rule,
    Spacer,
    // 14
    Step("14. Index the genome assembly by using bwa-mem2"),
    Check("create a virtual environment called bwa-mem2"),
    Block::bash("conda create -n bwa-mem2"),
    Check("activate the bwa-mem2 environment"),
    Block::bash("conda activate bwa-mem2"),
    Check("install bwa-mem2 within the environment"),
    Block::bash("conda install -c bioconda bwa-mem2"),
    Check("index the genome assembly provided by LKM to allow efficient alignment of the genome assembly with short reads later on"),
    Block::plain("nohup bwa-mem2 index /media/Raid/Wee/WeeYeZhi/resources_from_LKM/hybrid_genome_assembly_of_CPB/CPB_insect_draft_assembly.v4.fa > bwa_index.log 2>&1 &"),
    Block::link("Visit BWA GitHub Page", "https://github.com/lh3/bwa/blob/master/README.md"),
    Block::link("Visit BWA-MEM2 GitHub Page", "https://github.com/bwa-mem2/bwa-mem2"),
    Spacer,
    // 15
    Step("15. Correct the genome assembly provided by LKM using short reads"),
    Check("align short genomic reads with the genome assembly using bwa-mem2 to produce a SAM file"),
    Block::bash("nohup bwa-mem2 mem -t 48 /media/Raid/Wee/WeeYeZhi/resources_from_LKM/hybrid_genome_assembly_of_CPB/CPB_insect_draft_assembly.v4.fa /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_1/trimmed_Conopomorpha_raw_1.fastq /media/Raid/Wee/WeeYeZhi/output/Illumina_reads_LKM/fastp_results/Conopomorpha_raw_2/trimmed_Conopomorpha_raw_2.fastq > CPB_raw_hybrid_assembly_output.sam 2> CPB_raw_hybrid_assembly_output_sam.log &"),
    Check("install samtools within the 'samtools' conda environment"),
    Block::bash("conda install bioconda::samtools"),
    Check("convert the SAM file into BAM file"),
    Block::bash("nohup samtools view -@ 48 -Sb -o /media/Raid/Wee/WeeYeZhi/output/samtoolsresults/CPB_raw_LKM_hybrid_assembly/samtobam_conversion/CPB_raw_hybrid_assembly_output.bam /media/Raid/Wee/WeeYeZhi/output/bwa-mem2results/CPB_raw_LKM_hybrid_assembly/short_read_alignment/CPB_raw_hybrid_assembly_output.sam > /media/Raid/Wee/WeeYeZhi/output/samtoolsresults/CPB_raw_LKM_hybrid_assembly/samtobam_conversion/CPB_raw_hybrid_assembly_output_samtools_view.log 2>&1 &"),
    Check("sort the BAM file based on its genomic coordinates"),
    Block::plain("nohup samtools sort -@ 48 -O bam -o /media/Raid/Wee/WeeYeZhi/output/samtoolsresults/CPB_raw_LKM_hybrid_assembly/bam_sorting/CPB_raw_hybrid_assembly_output_sorted.bam /media/Raid/Wee/WeeYeZhi/output/samtoolsresults/CPB_raw_LKM_hybrid_assembly/samtobam_conversion/CPB_raw_hybrid_assembly_output.bam > /media/Raid/Wee/WeeYeZhi/output/samtoolsresults/CPB_raw_LKM_hybrid_assembly/bam_sorting/CPB_raw_hybrid_assembly_output_samtools_sort.log 2>&1 &"),
    Check("index the BAM file"),
    Block::bash("nohup samtools index /media/Raid/Wee/WeeYeZhi/output/samtoolsresults/CPB_raw_LKM_hybrid_assembly/bam_sorting/CPB_raw_hybrid_assembly_output_sorted.bam > /media/Raid/Wee/WeeYeZhi/output/samtoolsresults/CPB_raw_LKM_hybrid_assembly/bam_indexing/CPB_raw_hybrid_assembly_output_samtools_index.log 2>&1 &"),
    Check("generate the statistics summary of the sorted BAM file"),
    Block::bash("nohup samtools flagstat output_sorted.bam > output_samtools_flagstat.log 2>&1 &"),
    Block::bash("nohup samtools coverage -o coverage.txt output_sorted.bam > output_samtools_coverage.log 2>&1 &"),
    Block::bash("nohup samtools depth output_sorted.bam > samtools_depth.log 2>&1 &"),
    Check("install pilon within the 'pilon' conda environment"),
    Block::bash("java -version"),
    Block::bash("sudo apt update"),
    Block::bash("sudo apt install openjdk-11-jdk"),
    Block::bash("wget https://github.com/broadinstitute/pilon/releases/download/v1.24/pilon-1.24.jar -O pilon.jar"),
    Block::bash("java -jar /media/Raid/Wee/WeeYeZhi/output/Pilonresults/pilon.jar --version"),
    Check("polish the genome assembly by correcting SNPs, small insertions, deletions (indels) and large structural variations using short reads with Pilon"),
    Block::plain("nohup java -Xmx400G -jar /media/Raid/Wee/WeeYeZhi/output/Pilonresults/pilon.jar --genome /media/Raid/Wee/WeeYeZhi/resources_from_LKM/hybrid_genome_assembly_of_CPB/CPB_insect_draft_assembly.v4.fa --fix all --changes --bam /media/Raid/Wee/WeeYeZhi/output/samtoolsresults/CPB_raw_LKM_hybrid_assembly/bam_sorting/CPB_raw_hybrid_assembly_output_sorted.bam --output polished > pilon_stdout.log 2> pilon_stderr.log &"),
    Block::link("Visit samtools GitHub Page", "https://github.com/rnnh/bioinfo-notebook/blob/master/docs/samtools.md"),
    Block::link("Visit Pilon GitHub Page", "https://github.com/broadinstitute/pilon/wiki/Requirements-&-Usage"),
    Block::link("Visit Pilon Step-by-step Installation Page", "https://kalonjilabs.com/posts/How-to-Install-Pilon/"),
    Spacer,
    // 16
    Step("16. Align long read with the genome assembly to output the alignment statistics later (Optional) (No need to run this before running Longstitch as Longstitch already incorporated the minimap2 pipeline)"),
    Check("create a new environment named as 'minimap2' and activate it"),
    Block::bash("conda create -n minimap2"),
    Block::bash("conda activate minimap2"),
    Check("install minimap2 within the 'minimap2' environment"),
    Block::bash("git clone https://github.com/lh3/minimap2"),
    Block::bash("cd minimap2 && make"),
    Check("check the version of minimap2"),
    Block::bash("./minimap2 --version"),
    Check("run minimap2 to align the long PacBio CLR read with the insect genome assembly"),
    Block::bash("nohup ./minimap2 -ax map-pb your_genome_assembly_polished_by_Pilon.fa pacbio.fq.gz -t 48 > aln.sam 2> minimap2.log &"),
    Block::link("Visit minimap2 GitHub Page", "https://github.com/lh3/minimap2?tab=readme-ov-file"),
    Block::link("Visit minimap2 User Manual Page", "https://lh3.github.io/minimap2/minimap2.html"),
    Spacer,
    // 17
    Step("17. Correct the genome assembly provided by LKM further using long read"),
    Check("create a new environment named as 'longstitch' with a compatible version of Python to install longstitch"),
    Block::bash("conda create -n longstitch"),
    Block::bash("conda install -c bioconda longstitch"),
    Check("check the version of Longstitch, tigmint and ntLink that you are using respectively within the 'longstitch' conda environment"),
    Block::bash("longstitch"),
    Check("check whether all the dependencies of Longstitch have been installed successfully within the 'longstitch' conda environment"),
    Block::bash("conda list | grep make"),
    Block::bash("conda list | grep tigmint"),
    Block::bash("conda list | grep ntlink"),
    Block::bash("conda list | grep abyss"),
    Block::bash("conda list | grep arcs"),
    Block::bash("conda list | grep links"),
    Block::bash("conda list | grep samtools"),
    Check("run longstitch (tigmint-long & ntLink) pipeline through bash script to scaffold the CPB genome assembly"),
    Warning("make sure that you place your executable bash script, genome assembly file & long read file in the same working directory before you run the bash script"),
    Block::bash("chmod +x run_longstitch.sh"),
    Block::bash("nohup bash run_longstitch.sh > longstitch_output.log 2>&1 &"),
    Check("check whether the bash script is still running normally in the background"),
    Block::bash("ps aux | grep run_longstitch.sh"),
    Check("if there's need for you to terminate the bash script"),
    Block::bash("pkill -f -9 run_longstitch.sh"),
    Block::download("Download Longstitch Script", &LONGSTITCH),
    Block::link("Visit LongStitch GitHub Page", "https://github.com/bcgsc/LongStitch/blob/master/README.md"),
    Block::link("Visit tigmint GitHub Page", "https://github.com/bcgsc/tigmint/blob/master/README.md"),
    Block::link("Visit ntLink GitHub Page", "https://github.com/bcgsc/ntLink/blob/master/README.md"),
    Block::link("Visit arks GitHub Page", "https://github.com/bcgsc/arcs/blob/master/README.md"),
    Spacer,
    // 18
    Step("18. Evaluate the completeness of the genome assembly after scaffolding"),
    Check("create a virtual environment called 'busco' & install BUSCO within the environment"),
    Block::bash("conda create -n busco busco -c bioconda -c conda-forge -c defaults"),
    Check("activate the BUSCO environment"),
    Block::bash("conda activate busco"),
    Check("determine the lineage file suitable to be used for CPB genome by listing the lineage datasets available in BUSCO first, followed by referring to the NCBI BioProject of CPB (taxonomy) to check its taxonomy"),
    Block::bash("busco --list-datasets"),
    Block::bash("busco --list-datasets | grep -i lepidoptera_odb12"),
    Check("run BUSCO to evaluate the completeness of the improved CPB genome"),
    Block::bash("export NUMEXPR_MAX_THREADS=48"),
    Block::bash("nohup busco -m genome -i /media/Raid/Wee/WeeYeZhi/resources_from_LKM/hybrid_genome_assembly_of_CPB/CPB_insect_draft_assembly.v4.fa -c 48 -l lepidoptera_odb12 -o CPB_raw_hybrid_assembly_busco > CPB_raw_hybrid_assembly_busco_output.log 2>&1 &"),
    Block::link("Visit BUSCO User Guide Page", "https://busco.ezlab.org/busco_userguide.html"),
    Spacer,
    Warning("After running Pilon, remember to remove the word 'pilon' from the list of scaffold sequences within the polished.fasta file and save the polished.fasta file as polished_modified.fasta. After that, only then, you proceed with the next analysis like BUSCO analysis for example"),
    Block::plain("sed 's/|pilon//' polished.fasta > polished_modified.fasta"),
    Spacer,
    // 19
    Step("19. Evaluate the quality of the genome assembly after scaffolding"),
    Check("create a virtual environment called 'quast'"),
    Block::bash("conda create -n quast"),
    Check("activate the 'quast' environment"),
    Block::bash("conda activate quast"),
    Check("install quast within the Linux terminal"),
    Block::plain("conda install -c bioconda quast"),
    Check("display the command-line options available within the quast"),
    Block::bash("quast.py -h"),
    Check("run quast to evaluate the quality of the draft assembly and the scaffolded assembly"),
    Block::bash("nohup quast.py CPB_assembly.fa --report-all-metrics --large --eukaryote --threads 48 -o quast_output > quast_output.log 2>&1 &"),
    Block::link("Visit Quast GitHub Page", "https://github.com/ablab/quast/blob/master/README.md"),
    Block::link("Visit Quast User Manual Page", "https://quast.sourceforge.net/docs/manual.html"),
    Spacer,
    // 20
    Step("20. Perform softmasking for the repeat regions of the genome assembly using RepeatMasker before running BRAKER3"),
    Check("install RepeatMasker via bioconda"),
    Block::bash("conda install -c bioconda repeatmasker"),
    Check("display the help menu of Repeatmasker to make sure you have installed it correctly"),
    Block::bash("RepeatMasker -h"),
    Check("double check whether perl has been installed and install perl if it's not installed"),
    Block::bash("perl --version\nconda install -c bioconda perl"),
    Check("list down all the available repeat libraries used by RepeatMasker & check whether Dfam database is readily available"),
    Block::bash("RepeatMasker -list"),
    Check("run RepeatMasker to softmask the genome assembly to convert the repeat regions from uppercase letters to lowercase letters to easily distinguish real genes from repeat regions so that BRAKER3 won't mistake the repeat regions of the genome as coding regions during gene & protein prediction"),
    Block::bash("RepeatMasker -pa 8 -species insect -xsmall -dir masked_output genome.fasta"),
    Block::link("Visit RepeatMasker GitHub Page", "https://github.com/Dfam-consortium/RepeatMasker"),
    Block::link("Visit RepeatMasker DockerHub Page", "https://hub.docker.com/r/dnalinux/repeatmasker"),
    Block::link("Visit RepeatMasker User Manual Page", "https://www.repeatmasker.org/webrepeatmaskerhelp.html"),
    Block::link("Visit RepeatMasker WebServer", "https://www.repeatmasker.org/cgi-bin/WEBRepeatMasker"),
    Spacer,
    // 21
    Step("21. Predict the list of coding genes and proteins of the CPB genome using BRAKER3"),
    Check("switch to a non-root user"),
    Block::bash("su cbr15"),
    Check("after switching, get your user ID & group ID"),
    Block::bash("id -u\nid -g"),
    Check("check the version of docker that you are using"),
    Block::bash("docker --version"),
    Check("start running docker desktop and check its status to ensure it's actively running in the background."),
    Block::bash("systemctl --user start docker-desktop"),
    Block::bash("systemctl --user status docker-desktop"),
    Check("pull/download the braker3 docker image from DockerHub"),
    Block::bash("docker pull teambraker/braker3"),
    Check("check & verify whether you've pulled the braker3 docker image correctly & successfully"),
    Block::bash("docker images | grep braker3"),
    Check("run the braker3 docker container as shell"),
    Block::bash("docker run --user 1000:1000 --rm -it -v /media/Raid/Wee/WeeYeZhi/output/braker3:/data teambraker/braker3:latest bash"),
    Check("double check & make sure all the perl dependencies of braker3 are already installed inside the braker3 docker container (via bash script or via anaconda environment)"),
    Block::download("Download Braker3 Perl Module Installation Script", &BRAKER3_PERL_MODULES),
    Block::bash(
        "conda install -c anaconda perl (already pre-instaled inside the braker3 docker container)
conda install -c anaconda biopython (equivalent to conda/mamba packages: biopython)
conda install -c bioconda perl-app-cpanminus
conda install -c bioconda perl-file-spec
conda install -c bioconda perl-hash-merge (equivalent to libhash-merge-perl)
conda install -c bioconda perl-module-load-conditional
conda install -c bioconda perl-posix
conda install -c bioconda perl-file-homedir
conda install -c bioconda perl-parallel-forkmanager (equivalent to perl-parallel-forkmanager)
conda install -c bioconda perl-scalar-util-numeric (equivalent to libscalar-util-numeric-perl)
conda install -c bioconda perl-yaml (equivalent to libyaml-perl)
conda install -c bioconda perl-class-data-inheritable (equivalent to libclass-data-inheritable-perl)
conda install -c bioconda perl-exception-class (equivalent to libexception-class-perl)
conda install -c bioconda perl-test-pod (equivalent to libtest-pod-perl)
conda install -c bioconda perl-file-which (equivalent to libfile-which-perl)
conda install -c bioconda perl-mce (equivalent to libmce-perl)
conda install -c bioconda perl-threaded
conda install -c bioconda perl-list-util (equivalent to libscalar-list-utils-perl)
conda install -c bioconda perl-math-utils
conda install -c bioconda cdbtools
conda install -c eumetsat perl-yaml-xs
conda install -c bioconda perl-data-dumper",
    ),
    Check("ensure you have all the perl and python scripts of braker3 ready and make sure all of them are executable (you should get the expected output as shown below)"),
    Block::bash("ls -l *.pl *.py"),
    Block::bash(
        "Expected output
-rwxr-xr-x 1 katharina katharina  18191 Mai  7 10:25 align2hints.pl
-rwxr-xr-x 1 katharina katharina   6090 Feb 19 09:35 braker_cleanup.pl
-rwxr-xr-x 1 katharina katharina 408782 Aug 17 18:24 braker.pl
-rwxr-xr-x 1 katharina katharina   5024 Mai  7 10:25 downsample_traingenes.pl
-rwxr-xr-x 1 katharina katharina   5024 Mai  7 10:23 ensure_n_training_genes.py
-rwxr-xr-x 1 katharina katharina   4542 Apr  3  2019 filter_augustus_gff.pl
-rwxr-xr-x 1 katharina katharina  30453 Mai  7 10:25 filterGenemark.pl
-rwxr-xr-x 1 katharina katharina   5754 Mai  7 10:25 filterIntronsFindStrand.pl
-rwxr-xr-x 1 katharina katharina   7765 Mai  7 10:25 findGenesInIntrons.pl
-rwxr-xr-x 1 katharina katharina   1664 Feb 12  2019 gatech_pmp2hints.pl
-rwxr-xr-x 1 katharina katharina   2250 Jan  9 13:55 log_reg_prothints.pl
-rwxr-xr-x 1 katharina katharina   4679 Jan  9 13:55 merge_transcript_sets.pl
-rwxr-xr-x 1 katharina katharina  41674 Mai  7 10:25 startAlign.pl",
    ),
    Check("if you don't get the expected output, please make sure all the perl & python scripts are present and executable"),
    Block::bash("chmod a+x *.pl *.py"),
    Check("Navigate to the working directory in which all the BRAKER perl scripts reside and add this working directory to your $PATH environment variable (to run your braker3 perl scripts successfully from anywhere)"),
    Block::bash("export PATH=$(pwd):$PATH"),
    Check("check if the AUGUSTUS_CONFIG_PATH is already set inside the docker container"),
    Block::plain("docker run --rm teambraker/braker3 bash -c 'echo $AUGUSTUS_CONFIG_PATH' OR echo $AUGUSTUS_CONFIG_PATH"),
    Check("test your braker3 installation and validate whether you have correctly set up the braker3 docker container by testing test3.sh (before running braker3)"),
    Block::bash("bash /opt/BRAKER/example/docker-tests/test3.sh"),
    Check("ensure all the mandatory softwares and tools have been installed inside the braker3 docker container"),
    Bullet("GeneMark-ETP (already present inside container)"),
    Bullet("AUGUSTUS (already present inside container)"),
    Bullet("Python3 (already installed by default on Ubuntu)"),
    Bullet("Bamtools (already present inside container)"),
    Bullet("NCBI BLAST+ or DIAMOND (already present inside container)"),
    Bullet("StringTie2 (already present inside container)"),
    Bullet("BEDTools (already present inside container)"),
    Bullet("GffRead (already present inside container)"),
    Check("check whether you need to install all the following optional tools of BRAKER3"),
    Bullet("Samtools (install if you arent sure whether your files are formatted correctly)"),
    Bullet("BioPython (already present inside container)"),
    Bullet("cdbfasta (already present inside container)"),
    Bullet("Spaln (deprecated already)"),
    Bullet("GUSHR"),
    Bullet("Tools from UCSC (already present inside container)"),
    Bullet("MakeHub (already present inside container)"),
    Bullet("SRA Toolkit (already present inside container)"),
    Bullet("HISAT2 (already present inside container)"),
    Bullet("compleasm (need to install manually inside docker container to get the best gene model with highest busco completeness score)"),
    Bullet("pandas (install pandas python package manually)"),
    Bullet("libc-bin (install libc-bin manually)"),
    Check("execute braker3 in the terminal"),
    Block::bash("time perl braker.pl --workingdir=BRAKER3 --genome=/opt/BRAKER/example/gstenome.fa --bam=/opt/BRAKER/example/RNAseq.bam --prot_seq=/opt/BRAKER/example/proteins.fa --AUGUSTUS_BIN_PATH=/usr/bin/ --AUGUSTUS_SCRIPTS_PATH=/usr/share/augustus/scripts/ --threads=8 --species=CPB"),
    Rule,
    Step("Additional note"),
    Warning("The config/ directory from AUGUSTUS can be accessed with the variable AUGUSTUS_CONFIG_PATH. BRAKER3 requires this directory to be in a writable location, so if that is not the case, copy this directory to a writable location, e.g.: cp -r /root/mambaforge/envs/braker3/config/ /absolute_path_to_user_writable_directory/ export AUGUSTUS_CONFIG_PATH=/absolute_path_to_user_writable_directory/config Due to license and distribution restrictions, GeneMark-ETP and ProtHint should be additionally installed for BRAKER3 to fully work. These packages can be either installed as part of the BRAKER3 environment, or the PATH variable should be configured to point to them. The GeneMark key should be located in /root/.gm_key and GENEMARK_PATH should include the path to the GeneMark executables gmes_petap.pl or gmetp.pl."),
    Warning("If AUGUSTUS is properly installed and its paths are correctly set in your system's environment variables, you don't need to explicitly specify --AUGUSTUS_BIN_PATH and --AUGUSTUS_SCRIPTS_PATH in the BRAKER command. You can check if AUGUSTUS is properly configured by running:"),
    Block::bash("which augustus"),
    Block::bash("echo $AUGUSTUS_CONFIG_PATH"),
    Warning("To check whether BRAKER3 has been properly installed in the terminal, run the following command:"),
    Block::bash("braker3 --help"),
    Block::bash("braker.pl --help"),
    Rule,
    Block::link("Visit BRAKER3 GitHub Page", "https://github.com/Gaius-Augustus/BRAKER/blob/master/README.md"),
    Block::link("Visit BRAKER3 Container", "https://hub.docker.com/r/teambraker/braker3"),
    Rule,
    Spacer,
    Check("concatenate all the short reads 1 (r1) and short reads 2 (r2) together respectively (short paired-end reads derived from the NCBI SRA database and short illumina reads provided by LKM"),
    Block::bash("cat SRR*_1.fastq.gz Conopomorpha_raw_1.fastq.gz > all_R1.fastq.gz"),
    Block::bash("cat SRR*_2.fastq.gz Conopomorpha_raw_2.fastq.gz > all_R2.fastq.gz"),
    Check("use BRAKER3 with the galaxy version"),
    Check("create a new virtual environment called 'braker3'"),
    Block::bash("conda create -n braker3"),
    Check("activate the braker3 environment"),
    Block::bash("conda activate braker3"),
    Check("install braker3 in the 'braker3' virtual environment"),
    Block::bash("conda install -c bioconda braker3"),
    Check("check the current directory of the AUGUSTUS config in your system"),
    Block::bash("echo $AUGUSTUS_CONFIG_PATH"),
    Check("create a new directory for the AUGUSTUS config in your home directory & copy the AUGUSTUS config to a writable location"),
    Block::bash("cp -r /root/mambaforge/envs/braker3/config/ ~/augustus_config/"),
    Check("set the new AUGUSTUS config path"),
    Block::bash("export AUGUSTUS_CONFIG_PATH=~/augustus_config/config"),
    Check("verify the new AUGUSTUS config path"),
    Block::bash("echo $AUGUSTUS_CONFIG_PATH"),
    Check("install and set up GeneMark-ETP"),
    Block::link("register & download GeneMark-ETP & get the license key", "http://topaz.gatech.edu/GeneMark/license_download.cgi"),
    Check("extract the downloaded file"),
    Block::plain("tar -xzf gmes_linux_64_4.tar.gz"),
    Block::bash("cd gmes_linux_64_4"),
    Check("set GeneMark-ETP path"),
];
